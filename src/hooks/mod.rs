pub mod app_context;
pub mod use_location;
pub mod use_session;
pub mod use_theme;
pub mod use_toast;

pub use app_context::{use_app_context, AppContext, AppContextProvider};
pub use use_location::{geolocation_notification, use_location, UseLocationHandle};
pub use use_session::{use_session, UseSessionHandle};
pub use use_theme::{use_theme, UseThemeHandle};
pub use use_toast::{use_toast, UseToastHandle};
