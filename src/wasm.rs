//! wasm-bindgen surface for browser clients
//!
//! Frames cross the wire byte-for-byte compatible with the native codec, so
//! a browser peer can talk to a native transport directly.

use wasm_bindgen::prelude::*;

use crate::core::CodecError;
use crate::frame::{FrameDecoder, FrameEncoder};
use crate::profile;

fn to_js_err(e: CodecError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Encoder/decoder pair for one audio stream
#[wasm_bindgen]
pub struct WasmFrameCodec {
    encoder: FrameEncoder,
    decoder: FrameDecoder,
}

#[wasm_bindgen]
impl WasmFrameCodec {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        WasmFrameCodec {
            encoder: FrameEncoder::new(),
            decoder: FrameDecoder::new(),
        }
    }

    /// encode one 1024-sample frame
    pub fn encode(&mut self, samples: &[f32], profile: &str) -> Result<Vec<u8>, JsValue> {
        self.encoder.encode(samples, profile).map_err(to_js_err)
    }

    /// decode one frame back to 1024 samples
    pub fn decode(&self, data: &[u8]) -> Result<Vec<f32>, JsValue> {
        self.decoder
            .decode(data)
            .map(|frame| frame.samples)
            .map_err(to_js_err)
    }

    /// total encoded frame size in bytes for a named profile
    pub fn frame_size(&self, profile: &str) -> Result<usize, JsValue> {
        profile::frame_size_bytes(profile).map_err(to_js_err)
    }

    /// sequence number the next encoded frame will carry
    pub fn sequence(&self) -> u32 {
        self.encoder.sequence()
    }
}

impl Default for WasmFrameCodec {
    fn default() -> Self {
        Self::new()
    }
}
