use crate::image_picker::interface::ImagePicker;
use crate::selected_image::{SelectedImage, IMAGE_EXTENSIONS};

pub struct ImagePickerRfd {}

impl ImagePickerRfd {
    pub fn new() -> Self {
        Self {}
    }
}

impl ImagePicker for ImagePickerRfd {
    fn pick(&self) -> Result<Option<SelectedImage>, Box<dyn std::error::Error + Send + Sync>> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Upload image")
            .add_filter("Image", IMAGE_EXTENSIONS)
            .pick_file()
        else {
            return Ok(None);
        };

        Ok(Some(SelectedImage::from_path(&path)?))
    }
}
