use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use shopflow_auth::FrontendUser;
#[cfg(feature = "ssr")]
use shopflow_auth::AuthSession;

use super::routes::RouteTable;

/// Everything the welcome page needs from the server for one render.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageProps {
    pub user: Option<FrontendUser>,
    pub routes: RouteTable,
}

#[server(GetPageProps, "/api")]
pub async fn get_page_props() -> Result<PageProps, ServerFnError> {
    let auth_session = use_context::<AuthSession>()
        .ok_or_else(|| ServerFnError::new("Unable to find auth session".to_string()))?;
    let routes = use_context::<RouteTable>().unwrap_or_default();
    Ok(PageProps {
        user: auth_session.user.map(FrontendUser::from),
        routes,
    })
}

/// A failed props fetch degrades to the guest page with default routes.
pub fn props_or_guest(result: Result<PageProps, ServerFnError>) -> PageProps {
    result.unwrap_or_else(|err| {
        log::warn!("falling back to guest page props: {err}");
        PageProps::default()
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn page_props_need_an_auth_session() {
        let err = get_page_props().await.unwrap_err();
        assert!(err.to_string().contains("Unable to find auth session"));
    }

    #[tokio::test]
    async fn missing_session_falls_back_to_guest() {
        let props = props_or_guest(get_page_props().await);
        assert_eq!(props.user, None);
        assert_eq!(props.routes, RouteTable::default());
    }

    #[test]
    fn successful_fetch_is_kept() {
        let props = PageProps {
            user: Some(FrontendUser {
                display_name: Some("Till 2".to_string()),
            }),
            routes: RouteTable::with_base("https://pos.example"),
        };
        assert_eq!(props_or_guest(Ok(props.clone())), props);
    }
}
