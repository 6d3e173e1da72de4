use crate::error::CoordinateError;

/// A value that can be interpreted as a real number
///
/// Conversion only decides whether the value is numeric at all. Range and
/// finiteness checks happen in [`validate_coordinate`](crate::validate_coordinate),
/// so `"nan"` and `f64::INFINITY` both convert successfully here.
pub trait CoordinateInput {
    /// Convert to `f64`, failing with [`CoordinateError::NotNumeric`]
    fn to_coordinate(&self) -> Result<f64, CoordinateError>;
}

macro_rules! impl_numeric_input {
    ($($ty:ty),*) => {
        $(
            impl CoordinateInput for $ty {
                fn to_coordinate(&self) -> Result<f64, CoordinateError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_input!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CoordinateInput for str {
    fn to_coordinate(&self) -> Result<f64, CoordinateError> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| CoordinateError::NotNumeric {
                input: self.to_string(),
            })
    }
}

impl CoordinateInput for String {
    fn to_coordinate(&self) -> Result<f64, CoordinateError> {
        self.as_str().to_coordinate()
    }
}

impl<T: CoordinateInput> CoordinateInput for Option<T> {
    fn to_coordinate(&self) -> Result<f64, CoordinateError> {
        match self {
            Some(value) => value.to_coordinate(),
            None => Err(CoordinateError::NotNumeric {
                input: "None".to_string(),
            }),
        }
    }
}

impl<T: CoordinateInput + ?Sized> CoordinateInput for &T {
    fn to_coordinate(&self) -> Result<f64, CoordinateError> {
        (**self).to_coordinate()
    }
}

#[cfg(feature = "serde_json")]
impl CoordinateInput for serde_json::Value {
    fn to_coordinate(&self) -> Result<f64, CoordinateError> {
        use serde_json::Value;

        match self {
            Value::Number(number) => number.as_f64().ok_or_else(|| CoordinateError::NotNumeric {
                input: number.to_string(),
            }),
            Value::String(string) => string.to_coordinate(),
            other => Err(CoordinateError::NotNumeric {
                input: other.to_string(),
            }),
        }
    }
}
