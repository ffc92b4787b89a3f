pub mod link;
pub mod phone;
pub mod qr;
pub mod share;

pub use link::{build_link, decode_message, encode_message, GeneratedLink, WA_ME_BASE};
pub use phone::{
    normalize_phone, normalize_phone_with, NormalizedPhone, PhonePolicy, DEFAULT_COUNTRY_CODE,
    DEFAULT_LOCAL_LENGTH,
};
pub use qr::{QrErrorCorrection, QrOptions};
pub use share::{ShareRequest, SHARE_TITLE};
