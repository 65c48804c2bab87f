//! WASM adapter exposing the catalog to browser front ends
#![allow(non_snake_case)]

use epicatalog::{parse_csv as parse_document, Catalog, CatalogItem, MemorySelection, SelectionStore};
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static CATALOG: RefCell<Catalog> = RefCell::new(Catalog::default());
    static SELECTION: RefCell<MemorySelection> = RefCell::new(MemorySelection::new());
    static CALLBACK: RefCell<Option<Function>> = RefCell::new(None);
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    to_value(value).unwrap_or(JsValue::NULL)
}

fn notify_selection() {
    let count = SELECTION.with(|s| s.borrow().len());
    CALLBACK.with(|c| {
        if let Some(cb) = &*c.borrow() {
            let _ = cb.call1(&JsValue::NULL, &JsValue::from(count as u32));
        }
    });
}

/// Parse CSV text into an array of arrays of strings
#[wasm_bindgen]
pub fn parse_csv(contents: &str) -> JsValue {
    to_js(&parse_document(contents))
}

/// Replace the loaded catalog; returns the number of items
#[wasm_bindgen]
pub fn load_catalog(contents: &str) -> Result<u32, JsValue> {
    let catalog = Catalog::from_csv_str(contents).map_err(js_error)?;
    let count = catalog.len() as u32;
    CATALOG.with(|c| *c.borrow_mut() = catalog);
    Ok(count)
}

/// Items matching the query, as objects
#[wasm_bindgen]
pub fn search(query: &str) -> JsValue {
    CATALOG.with(|c| to_js(&c.borrow().search(query)))
}

/// Item with this exact code, or `null`
#[wasm_bindgen]
pub fn find_item(code: &str) -> JsValue {
    CATALOG.with(|c| match c.borrow().find(code) {
        Some(item) => to_js(item),
        None => JsValue::NULL,
    })
}

/// Register a callback receiving the selection size after every change
#[wasm_bindgen]
pub fn register_callback(cb: &Function) {
    CALLBACK.with(|c| {
        *c.borrow_mut() = Some(cb.clone());
    });
}

/// Replace the selection, e.g. with ids restored from localStorage
#[wasm_bindgen]
pub fn restore_selection(ids: Vec<String>) -> Result<(), JsValue> {
    SELECTION.with(|s| {
        let mut selection = s.borrow_mut();
        selection.clear().map_err(js_error)?;
        for id in &ids {
            selection.add(id).map_err(js_error)?;
        }
        Ok::<(), JsValue>(())
    })?;
    notify_selection();
    Ok(())
}

/// Select or deselect an item code
#[wasm_bindgen]
pub fn set_selected(code: &str, selected: bool) -> Result<(), JsValue> {
    SELECTION.with(|s| {
        let mut selection = s.borrow_mut();
        let result = if selected {
            selection.add(code)
        } else {
            selection.remove(code)
        };
        result.map_err(js_error)
    })?;
    notify_selection();
    Ok(())
}

/// Selected ids, for persisting on the JS side
#[wasm_bindgen]
pub fn selected_ids() -> Vec<String> {
    SELECTION.with(|s| s.borrow().get_all().into_iter().collect())
}

/// Selected catalog items in catalog order
#[wasm_bindgen]
pub fn selected_items() -> JsValue {
    CATALOG.with(|c| {
        SELECTION.with(|s| {
            let catalog = c.borrow();
            let selection = s.borrow();
            let items: Vec<&CatalogItem> = catalog.selected(&*selection);
            to_js(&items)
        })
    })
}

/// Deselect everything
#[wasm_bindgen]
pub fn clear_selection() -> Result<(), JsValue> {
    SELECTION.with(|s| s.borrow_mut().clear().map_err(js_error))?;
    notify_selection();
    Ok(())
}
