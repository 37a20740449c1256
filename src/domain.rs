pub mod customer;

pub use self::customer::*;

/// Multiplier used when folding field hashes together.
pub const HASH_MULTIPLIER: i32 = 31;

/// 32ビットの構造的ハッシュ値
///
/// Values that compare equal must return the same code. Arithmetic wraps.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

impl HashCode for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16().fold(0i32, |h, unit| {
            h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i32::from(unit))
        })
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

/// Folds already computed field codes in order: `((a * 31 + b) * 31 + c)...`.
pub fn combine_hash_codes<I>(codes: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    let mut codes = codes.into_iter();
    let first = codes.next().unwrap_or(0);
    codes.fold(first, |h, code| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(code)
    })
}
