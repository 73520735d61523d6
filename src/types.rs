//! 核心类型定义 - 宽度描述、查询结果和类型化键值编码

use std::borrow::Cow;

use crate::error::CuckooError;

/// 键/值的字节宽度描述
///
/// `Fixed(n)` 表示每个键/值恰好 `n` 字节；`Terminated` 表示以 `0` 结尾的
/// 变长字节串，存储长度为 `length + 1`（含结尾符）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Fixed(usize),
    Terminated,
}

impl Width {
    /// 从原始字节数构造：`0` 为变长哨兵值
    pub const fn from_raw(bytes: usize) -> Self {
        if bytes == 0 {
            Self::Terminated
        } else {
            Self::Fixed(bytes)
        }
    }

    /// 是否为变长（以结尾符界定）
    pub const fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// 调用方字节对应的存储长度
    pub fn stored_len(&self, bytes: &[u8]) -> usize {
        match *self {
            Self::Fixed(n) => n,
            Self::Terminated => until_terminator(bytes).len() + 1,
        }
    }

    /// 查询视图：用于哈希和比较的有效字节，不分配内存
    ///
    /// 定长宽度下长度不符的键不可能存在于表中，返回 `None`。
    pub fn view<'a>(&self, bytes: &'a [u8]) -> Option<&'a [u8]> {
        match *self {
            Self::Fixed(n) if bytes.len() == n => Some(bytes),
            Self::Fixed(_) => None,
            Self::Terminated => Some(until_terminator(bytes)),
        }
    }

    /// 把调用方字节拷贝为表内独占的存储形式
    pub fn to_owned_bytes(&self, bytes: &[u8]) -> Result<Box<[u8]>, CuckooError> {
        match *self {
            Self::Fixed(n) if bytes.len() == n => Ok(Box::from(bytes)),
            Self::Fixed(n) => Err(CuckooError::WidthMismatch {
                expected: n,
                actual: bytes.len(),
            }),
            Self::Terminated => {
                let body = until_terminator(bytes);
                let mut stored = Vec::with_capacity(body.len() + 1);
                stored.extend_from_slice(body);
                stored.push(0);
                Ok(stored.into_boxed_slice())
            }
        }
    }

    /// 存储形式去掉结尾符后的有效载荷
    pub fn payload<'a>(&self, stored: &'a [u8]) -> &'a [u8] {
        match *self {
            Self::Fixed(_) => stored,
            Self::Terminated => &stored[..stored.len().saturating_sub(1)],
        }
    }
}

fn until_terminator(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// 查询结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// 找到，携带写入缓冲区的字节数
    Found(usize),
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// 删除结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotFound,
}

impl Removal {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// 值类型 - 可编码为固定宽度或以结尾符界定的字节
pub trait Value: Sized {
    /// 建表时声明的宽度
    const WIDTH: Width;

    /// 获取值的字节表示
    fn encode(&self) -> Cow<'_, [u8]>;

    /// 从存储的有效载荷重建值
    fn decode(bytes: &[u8]) -> Option<Self>;
}

/// 键类型 - 字节相等即键相等
pub trait Key: Value + Eq {}

macro_rules! impl_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Value for $t {
                const WIDTH: Width = Width::Fixed(std::mem::size_of::<$t>());

                fn encode(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_le_bytes().to_vec())
                }

                fn decode(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_le_bytes)
                }
            }
        )*
    };
}

impl_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Key for u8 {}
impl Key for u16 {}
impl Key for u32 {}
impl Key for u64 {}
impl Key for u128 {}
impl Key for usize {}
impl Key for i8 {}
impl Key for i16 {}
impl Key for i32 {}
impl Key for i64 {}
impl Key for i128 {}
impl Key for isize {}

impl Value for bool {
    const WIDTH: Width = Width::Fixed(1);

    fn encode(&self) -> Cow<'_, [u8]> {
        Cow::Owned(vec![u8::from(*self)])
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0] => Some(false),
            [1] => Some(true),
            _ => None,
        }
    }
}

impl Key for bool {}

impl Value for char {
    const WIDTH: Width = Width::Fixed(4);

    fn encode(&self) -> Cow<'_, [u8]> {
        Cow::Owned(u32::from(*self).to_le_bytes().to_vec())
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        u32::decode(bytes).and_then(char::from_u32)
    }
}

impl Key for char {}

impl<const N: usize> Value for [u8; N] {
    const WIDTH: Width = Width::Fixed(N);

    fn encode(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok()
    }
}

impl<const N: usize> Key for [u8; N] {}

/// 字符串按变长存储；内部的 `\0` 之后的内容会被截断
impl Value for String {
    const WIDTH: Width = Width::Terminated;

    fn encode(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        std::str::from_utf8(bytes).ok().map(String::from)
    }
}

impl Key for String {}
