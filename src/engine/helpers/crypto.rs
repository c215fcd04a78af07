use crate::prelude::*;

pub fn md5<B:AsRef<[u8]>>(body: B) -> Md5Hash {
    Md5Hash::from(u128::from_be_bytes(md5::compute(body).0))
}
