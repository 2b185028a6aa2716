pub mod confirm_dialog;
pub mod layout;
pub mod loading;
pub mod map_view;
pub mod protected_route;
pub mod toast_viewport;

pub use confirm_dialog::ConfirmDialog;
pub use layout::{DashboardLayout, Navigation};
pub use loading::{SkeletonList, Spinner};
pub use map_view::MapView;
pub use protected_route::Protected;
pub use toast_viewport::ToastViewport;
