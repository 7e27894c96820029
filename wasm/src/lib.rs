use wasm_bindgen::prelude::*;
use wavemsg_core::{AudioBuffer, Extractor, NullObserver, ToneEncoder};

#[wasm_bindgen]
pub struct WasmEncoder {
    inner: ToneEncoder,
}

#[wasm_bindgen]
impl WasmEncoder {
    #[wasm_bindgen(constructor)]
    pub fn new(sample_rate: u32) -> Result<WasmEncoder, JsValue> {
        ToneEncoder::new(sample_rate)
            .map(|encoder| WasmEncoder { inner: encoder })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Encode binary data into audio samples
    /// Takes a Uint8Array and returns Float32Array of audio samples
    #[wasm_bindgen]
    pub fn encode(&self, data: &[u8]) -> Vec<f32> {
        self.inner.encode(data)
    }
}

#[wasm_bindgen]
pub struct WasmExtractor {
    inner: Extractor<NullObserver>,
    invalid_messages: usize,
}

#[wasm_bindgen]
impl WasmExtractor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmExtractor {
        WasmExtractor {
            inner: Extractor::with_observer(NullObserver),
            invalid_messages: 0,
        }
    }

    /// Decode mono audio samples
    /// Takes a Float32Array and returns Uint8Array with the data bytes of every message
    #[wasm_bindgen]
    pub fn decode(&mut self, samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, JsValue> {
        self.invalid_messages = 0;
        let audio = AudioBuffer::mono(sample_rate, samples.to_vec());
        let messages = self
            .inner
            .run(&audio)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        self.invalid_messages = messages.iter().filter(|m| !m.is_valid()).count();
        Ok(messages.iter().flat_map(|m| m.data).collect())
    }

    /// Number of messages in the last decode whose checksum did not match
    #[wasm_bindgen(getter)]
    pub fn invalid_messages(&self) -> usize {
        self.invalid_messages
    }
}

impl Default for WasmExtractor {
    fn default() -> Self {
        Self::new()
    }
}
