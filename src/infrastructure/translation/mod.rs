mod gtx_translate_client;

pub use gtx_translate_client::{GtxTranslateClient, DEFAULT_TRANSLATE_ENDPOINT};
