//! User configuration and its flat query-string codec.

pub(crate) mod codec;
pub(crate) mod model;

pub use codec::{
    KEYS, RENDER_FLAG, decode_pairs, decode_query, encode_pairs, encode_query, has_render_flag,
    query_of, render_link,
};
pub use model::{
    Configuration, DEFAULT_BIRTH_DATE, DotShape, Mode, QuoteKind, ShapeFamily, parse_birth_date,
};
