mod imgbb_image_hosting_service;
mod local_image_store;
mod path_list_image_picker;

pub use imgbb_image_hosting_service::ImgbbImageHostingService;
pub use local_image_store::LocalImageStore;
pub use path_list_image_picker::PathListImagePicker;
