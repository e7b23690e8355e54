mod props;
mod root;
mod routes;
mod welcome;

pub use props::{get_page_props, PageProps};
pub use root::App;
#[cfg(feature = "ssr")]
pub use root::shell;
pub use routes::{RouteName, RouteTable, UnknownRoute};
