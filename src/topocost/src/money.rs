use serde::{Deserialize, Serialize};

pub trait CostTrait {
    fn dollars(self) -> Cost;
}

/// A monetary amount in whole currency units. Hardware unit counts are
/// always integral, so no fractional currency can arise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost {
    val: u64,
}

impl Cost {
    #[inline]
    pub fn val(&self) -> u64 {
        self.val
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.val)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut s = 0.dollars();
        for c in iter {
            s = s + c;
        }
        s
    }
}

impl std::cmp::PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.val().eq(&other.val())
    }
}

impl Eq for Cost {}

impl std::cmp::PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.val().cmp(&other.val())
    }
}

impl std::ops::Add for Cost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Cost {
            val: self.val + rhs.val,
        }
    }
}

impl std::ops::Sub for Cost {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Cost {
            val: self.val - rhs.val,
        }
    }
}

macro_rules! impl_cost_div_mul_for {
    ($($ty:ty),+ $(,)?) => (
        $(impl std::ops::Div<$ty> for Cost {
            type Output = Self;
            fn div(self, rhs: $ty) -> Self::Output {
                Cost {
                    val: ((self.val as f64) / rhs as f64) as u64,
                }
            }
        }
        impl std::ops::Mul<$ty> for Cost {
            type Output = Self;
            fn mul(self, rhs: $ty) -> Self::Output {
                Cost {
                    val: ((self.val as f64) * rhs as f64) as u64,
                }
            }
        })+
    )
}

impl_cost_div_mul_for!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, isize, usize);

macro_rules! impl_cost_trait_for {
    ($($ty:ty),+ $(,)?) => (
        $(impl CostTrait for $ty
        {
            fn dollars(self) -> Cost {
                Cost { val: self as u64 }
            }
        })+
    )
}

impl_cost_trait_for!(u8, u16, u32, u64, i8, i16, i32, i64, isize, usize);
