use crate::selected_image::SelectedImage;

pub trait ImagePicker: Send + Sync {
    /// Returns `Ok(None)` when the user dismisses the picker.
    fn pick(&self) -> Result<Option<SelectedImage>, Box<dyn std::error::Error + Send + Sync>>;
}
