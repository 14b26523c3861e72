//! WebAssembly bindings.
//!
//! Trits cross the boundary as `Int8Array`s, trytes as strings.

use wasm_bindgen::prelude::*;
use crate::codec::{self, CodecError};
use crate::ternary::Trit;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(e: CodecError) -> JsError {
    JsError::new(&e.to_string())
}

/// Decode a tryte string into trits.
#[wasm_bindgen(js_name = decodeTrytes)]
pub fn decode_trytes(trytes: &str) -> Result<Vec<i8>, JsError> {
    let trits = codec::decode(trytes).map_err(js_error)?;
    Ok(codec::trits_to_i8(&trits))
}

/// Encode trits (-1, 0, 1) into a tryte string.
#[wasm_bindgen(js_name = encodeTrits)]
pub fn encode_trits(trits: &[i8]) -> Result<String, JsError> {
    let trits = codec::trits_from_i8(trits).map_err(js_error)?;
    Ok(codec::encode(&trits))
}

/// A counter after one step: its trytes and the carry out of the top trit.
#[wasm_bindgen]
pub struct CounterStep {
    trytes: String,
    carry: u64,
}

#[wasm_bindgen]
impl CounterStep {
    #[wasm_bindgen(getter)]
    pub fn trytes(&self) -> String {
        self.trytes.clone()
    }

    /// Non-zero when the counter overflowed.
    #[wasm_bindgen(getter)]
    pub fn carry(&self) -> u64 {
        self.carry
    }
}

/// Add `n` to the counter held in a tryte string.
#[wasm_bindgen(js_name = addToTrytes)]
pub fn add_to_trytes(trytes: &str, n: u64) -> Result<CounterStep, JsError> {
    let (trytes, carry) = codec::add_to_trytes(trytes, n).map_err(js_error)?;
    Ok(CounterStep { trytes, carry })
}

/// Increment the counter held in a tryte string, wrapping at the top.
#[wasm_bindgen(js_name = incrementTrytes)]
pub fn increment_trytes(trytes: &str) -> Result<CounterStep, JsError> {
    let (trytes, carry) = codec::increment_trytes(trytes).map_err(js_error)?;
    Ok(CounterStep { trytes, carry: u64::from(carry == Trit::P) })
}

/// Evaluate the substitution box on two trits.
#[wasm_bindgen]
pub fn truth(x1: i8, x2: i8) -> Result<i8, JsError> {
    let x1 = Trit::try_from(x1).map_err(|e| JsError::new(&e.to_string()))?;
    let x2 = Trit::try_from(x2).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(crate::truth::truth(x1, x2).to_i8())
}
