pub mod contact;
pub mod landing;
pub mod privacy;
pub mod terms;
