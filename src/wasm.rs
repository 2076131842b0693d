//! WASM bindings for Ohmic Core.
//!
//! This module provides JavaScript-friendly bindings for use in web pages,
//! e.g. an interactive circuit exercise.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { equivalent_resistance, reduction_trace } from 'ohmic_core';
//!
//! await init();
//!
//! const netlist = `
//!   R1 a b 10
//!   R2 b c 20
//!   R3 b c 30
//!   R4 c d 40
//! `;
//!
//! equivalent_resistance(netlist, 'a', 'd');   // 62
//! reduction_trace(netlist, 'a', 'd');         // ["parallel b–c: ...", ...]
//! ```

use wasm_bindgen::prelude::*;

use crate::netlist;
use crate::reduce::Reduction;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn reduce(netlist_text: &str, from: &str, to: &str) -> Result<Reduction<String>, JsValue> {
    let netlist = netlist::parse(netlist_text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut circuit = netlist
        .to_circuit()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    circuit
        .equivalent_resistance(&from.to_string(), &to.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Equivalent resistance between two nodes of a netlist.
///
/// # Returns
/// The resistance in ohms, or `NaN` if the network cannot be reduced by
/// series/parallel rules. Malformed netlists and unknown terminals throw.
#[wasm_bindgen]
pub fn equivalent_resistance(netlist_text: &str, from: &str, to: &str) -> Result<f64, JsValue> {
    Ok(reduce(netlist_text, from, to)?.resistance().unwrap_or(f64::NAN))
}

/// Human-readable reduction steps, one string per rewrite.
#[wasm_bindgen]
pub fn reduction_trace(netlist_text: &str, from: &str, to: &str) -> Result<Vec<String>, JsValue> {
    let result = reduce(netlist_text, from, to)?;
    Ok(result.steps().iter().map(|step| step.to_string()).collect())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
