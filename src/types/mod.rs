mod profile;
pub use self::profile::Profile;

mod image;
pub use self::image::{DeletedImage, Image, ImageList, ImageMetadata, Ocr};

mod upload;
pub use self::upload::UploadResult;
