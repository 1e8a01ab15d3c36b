//! 比较引擎使用的序列访问契约。
//!
//! # 设计背景（Why）
//! - 被比较的集合有的支持 O(1) 随机访问（`Vec`、`VecDeque`、切片），有的只能前向迭代
//!   （`LinkedList`、`BTreeSet`）。若在扫描循环内反复判断访问方式，热路径会被分支污染。
//! - 因此每个序列在入口处通过 [`Sequence::access`] 被**一次性**归类为
//!   [`Access::Indexed`] 或 [`Access::Iterated`]，随后扫描只推进统一的 [`Cursor`]。
//!
//! # 契约说明（What）
//! - `len()` 为声明长度，单次比较期间不得变化；
//! - `Indexed` 序列必须对 `0..len()` 内的所有下标返回 `Some`；
//! - `Iterated` 序列的迭代器可能与声明长度不一致（实现有缺陷），引擎会在配对推进时发现并报告。

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::sync::Arc;

/// 固定长度、可按元素访问的只读序列。
pub trait Sequence {
    /// 元素类型。
    type Item;

    /// 前向迭代器。
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// 声明长度。
    fn len(&self) -> usize;

    /// 是否为空。
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 对随机访问序列返回下标处元素；迭代型序列可始终返回 `None`。
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// 返回前向迭代器。
    fn iter(&self) -> Self::Iter<'_>;

    /// 是否支持 O(1) 随机访问。
    fn is_indexed(&self) -> bool;

    /// 序列本体的地址，用于同一对象判定；转发型实现须返回被转发对象的地址。
    fn identity(&self) -> *const () {
        (self as *const Self).cast()
    }

    /// 在比较入口处对序列进行一次性归类。
    fn access(&self) -> Access<'_, Self> {
        if self.is_indexed() {
            Access::Indexed(self)
        } else {
            Access::Iterated(self.iter())
        }
    }
}

/// 序列的访问模式。
pub enum Access<'a, S: Sequence + ?Sized + 'a> {
    /// 按下标直接读取。
    Indexed(&'a S),
    /// 只能前向迭代。
    Iterated(S::Iter<'a>),
}

impl<'a, S: Sequence + ?Sized + 'a> Access<'a, S> {
    /// 转换为统一的逐元素游标。
    pub fn into_cursor(self) -> Cursor<'a, S> {
        match self {
            Access::Indexed(seq) => Cursor::Indexed {
                seq,
                position: 0,
                len: seq.len(),
            },
            Access::Iterated(iter) => Cursor::Iterated(iter),
        }
    }
}

/// 统一的“取下一个位置元素”访问器。
///
/// 扫描循环只与游标交互，不再关心底层是下标访问还是迭代器。
pub enum Cursor<'a, S: Sequence + ?Sized + 'a> {
    Indexed {
        seq: &'a S,
        position: usize,
        len: usize,
    },
    Iterated(S::Iter<'a>),
}

impl<'a, S: Sequence + ?Sized + 'a> Iterator for Cursor<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Cursor::Indexed { seq, position, len } => {
                if *position >= *len {
                    return None;
                }
                let item = Sequence::get(*seq, *position);
                *position += 1;
                item
            }
            Cursor::Iterated(iter) => iter.next(),
        }
    }
}

macro_rules! indexed_sequence {
    ($(impl[$($gen:tt)*] for $ty:ty;)*) => {
        $(
            impl<$($gen)*> Sequence for $ty {
                type Item = T;
                type Iter<'a>
                    = core::slice::Iter<'a, T>
                where
                    Self: 'a;

                fn len(&self) -> usize {
                    <[T]>::len(self)
                }

                fn get(&self, index: usize) -> Option<&T> {
                    <[T]>::get(self, index)
                }

                fn iter(&self) -> Self::Iter<'_> {
                    <[T]>::iter(self)
                }

                fn is_indexed(&self) -> bool {
                    true
                }
            }
        )*
    };
}

indexed_sequence! {
    impl[T] for [T];
    impl[T, const N: usize] for [T; N];
    impl[T] for Vec<T>;
    impl[T] for Box<[T]>;
    impl[T] for Arc<[T]>;
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn is_indexed(&self) -> bool {
        true
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Iter<'a>
        = std::collections::linked_list::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn is_indexed(&self) -> bool {
        false
    }
}

impl<T> Sequence for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }

    fn is_indexed(&self) -> bool {
        false
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }

    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }

    fn is_indexed(&self) -> bool {
        (**self).is_indexed()
    }

    fn identity(&self) -> *const () {
        (**self).identity()
    }
}
