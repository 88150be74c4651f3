//! The crop modal: widget state plus save and dismiss callbacks.
//!
//! The host renders the modal and the cropping widget. It forwards widget
//! events here and gets two callbacks back:
//!
//! - `on_complete(bytes: Uint8Array, filename: string, mime: string)` after Save
//! - `on_close(reason: string)` after Cancel, Escape or a backdrop click
//!
//! A dismissed modal ignores any later Save, so a result from a modal the
//! user already closed is never delivered.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const modal = new JsCropModal(
//!   (bytes, name, mime) => upload(new File([bytes], name, { type: mime })),
//!   (reason) => setOpen(false),
//!   { quality: 0.9, maxSide: 512 },
//! );
//! // <Cropper onCropComplete={(_, px) => modal.set_crop_complete(px.x, px.y, px.width, px.height)} />
//! saveButton.onclick = () => modal.save(sourceBytes);
//! window.onkeydown = (e) => e.key === 'Escape' && modal.dismiss('escape');
//! ```

use avatar_crop_core::{
    crop_to_square, CropError, CropOptions, CropRegion, CropState, ImageReference, OutputImage,
    RegionError,
};
use js_sys::{Function, Uint8Array};
use wasm_bindgen::prelude::*;

use crate::crop::{parse_options, to_js_error};

/// Why the modal was closed without saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DismissReason {
    Cancel,
    Escape,
    Backdrop,
}

impl DismissReason {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value {
            "cancel" => Some(DismissReason::Cancel),
            "escape" => Some(DismissReason::Escape),
            "backdrop" => Some(DismissReason::Backdrop),
            _ => None,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DismissReason::Cancel => "cancel",
            DismissReason::Escape => "escape",
            DismissReason::Backdrop => "backdrop",
        }
    }
}

/// Modal logic without any JS types.
#[derive(Debug, Clone, Default)]
pub(crate) struct ModalCore {
    state: CropState,
    options: CropOptions,
    dismissed: Option<DismissReason>,
}

impl ModalCore {
    pub(crate) fn new(options: CropOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub(crate) fn state(&self) -> CropState {
        self.state
    }

    pub(crate) fn apply(&mut self, update: impl FnOnce(CropState) -> CropState) {
        self.state = update(self.state);
    }

    pub(crate) fn is_open(&self) -> bool {
        self.dismissed.is_none()
    }

    /// Record a dismissal. Returns `false` if the modal was already closed.
    pub(crate) fn dismiss(&mut self, reason: DismissReason) -> bool {
        if self.dismissed.is_some() {
            return false;
        }
        self.dismissed = Some(reason);
        true
    }

    /// Run the crop for the current region. `Ok(None)` when dismissed.
    pub(crate) fn save(&self, source: ImageReference) -> Result<Option<OutputImage>, CropError> {
        if !self.is_open() {
            return Ok(None);
        }
        let region = self
            .state
            .completed_region()
            .ok_or(RegionError::NotSelected)?;
        crop_to_square(&source, &region, &self.options).map(Some)
    }
}

/// Crop modal exposed to JavaScript.
#[wasm_bindgen]
pub struct JsCropModal {
    core: ModalCore,
    on_complete: Function,
    on_close: Function,
}

#[wasm_bindgen]
impl JsCropModal {
    /// Create a modal with its completion and close callbacks.
    ///
    /// `options` may be `undefined` or `{ quality, filename, maxSide, filter }`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        on_complete: Function,
        on_close: Function,
        options: JsValue,
    ) -> Result<JsCropModal, JsValue> {
        Ok(JsCropModal {
            core: ModalCore::new(parse_options(options)?),
            on_complete,
            on_close,
        })
    }

    /// Widget pan offset changed.
    pub fn set_crop(&mut self, x: f64, y: f64) {
        self.core.apply(|state| state.with_crop(x, y));
    }

    /// Widget zoom changed; clamped to 1..=3.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.core.apply(|state| state.with_zoom(zoom));
    }

    /// Widget settled on a region, in source pixels.
    pub fn set_crop_complete(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let region = CropRegion::new(x, y, width, height);
        self.core.apply(|state| state.with_completed_region(region));
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.core.state().zoom()
    }

    /// Whether Save would get past region validation.
    #[wasm_bindgen(getter)]
    pub fn is_ready(&self) -> bool {
        self.core.state().is_ready()
    }

    #[wasm_bindgen(getter)]
    pub fn is_open(&self) -> bool {
        self.core.is_open()
    }

    /// Snapshot of the widget state as a plain object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.core.state())?)
    }

    /// Crop `source` and hand the JPEG to `on_complete`.
    ///
    /// Returns `false` without calling back if the modal was dismissed.
    pub fn save(&self, source: &[u8]) -> Result<bool, JsValue> {
        let output = match self.core.save(ImageReference::Bytes(source.to_vec())) {
            Ok(Some(output)) => output,
            Ok(None) => return Ok(false),
            Err(err) => {
                let err = to_js_error(err);
                web_sys::console::error_1(&err);
                return Err(err);
            }
        };

        let bytes = Uint8Array::from(output.bytes.as_slice());
        self.on_complete
            .call3(
                &JsValue::NULL,
                &bytes,
                &JsValue::from_str(&output.filename),
                &JsValue::from_str(output.mime_type()),
            )
            .map_err(report_callback_error)?;
        Ok(true)
    }

    /// Close without saving. `reason` is `"cancel"`, `"escape"` or `"backdrop"`.
    ///
    /// `on_close` fires once; repeated dismissals are ignored.
    pub fn dismiss(&mut self, reason: &str) -> Result<(), JsValue> {
        let reason = DismissReason::parse(reason)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown dismiss reason: {}", reason)))?;

        if !self.core.dismiss(reason) {
            return Ok(());
        }
        log::debug!("crop modal dismissed: {}", reason.as_str());
        self.on_close
            .call1(&JsValue::NULL, &JsValue::from_str(reason.as_str()))
            .map_err(report_callback_error)?;
        Ok(())
    }
}

fn report_callback_error(err: JsValue) -> JsValue {
    web_sys::console::error_1(&err);
    err
}
