use num::Num;
use num::ToPrimitive;

pub trait Extrema<T> {
    fn extrema(&self) -> (T, T);
}

impl Extrema<f64> for [f64] {
    fn extrema(&self) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        self.iter().for_each(|x| {
            if x < &min {
                min = *x;
            }
            if x > &max {
                max = *x;
            }
        });
        (min, max)
    }
}

pub trait Mean {
    fn mean(&self) -> f64;
}

// an empty slice averages to 0.0 rather than NaN
impl<N> Mean for [N]
where
    N: Num + ToPrimitive + Copy,
{
    fn mean(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum = self.iter().fold(N::zero(), |a, &b| a + b);
        sum.to_f64().unwrap_or(0.0) / self.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_values() {
        assert_eq!([1.0, 3.0].mean(), 2.0);
        assert_eq!([2i32, 4, 6].mean(), 4.0);
    }

    #[test]
    fn mean_of_empty_slice_is_zero() {
        let empty: [f64; 0] = [];
        assert_eq!(empty.mean(), 0.0);
    }

    #[test]
    fn extrema_of_values() {
        assert_eq!([3.0, -1.0, 2.5].extrema(), (-1.0, 3.0));
    }
}
