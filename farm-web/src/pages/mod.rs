pub mod about;
pub mod admin;
pub mod contact;
pub mod crop_analysis;
pub mod crops;
pub mod device_data;
pub mod device_setup;
pub mod farmer_registration;
pub mod gallery;
pub mod home;
pub mod kyc_update;
pub mod login;
pub mod products;
pub mod profile;
pub mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use crop_analysis::CropAnalysisPage;
pub use crops::{CropDetailPage, CropsPage};
pub use device_data::DeviceDataPage;
pub use device_setup::DeviceSetupPage;
pub use farmer_registration::FarmerRegistrationPage;
pub use gallery::{GalleryDetailsPage, GalleryPage};
pub use home::HomePage;
pub use kyc_update::KycUpdatePage;
pub use login::LoginPage;
pub use products::{ProductDetailsPage, ProductListPage};
pub use profile::ProfilePage;
pub use services::{ServiceDetailsPage, ServicePage};
