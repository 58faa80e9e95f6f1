pub mod detection_upload;
pub mod landing;
pub mod navbar;
pub mod profile;
pub mod results;
pub mod sign_in;
pub mod sign_up;
pub mod species_picker;
pub mod toast;
pub mod utils;
