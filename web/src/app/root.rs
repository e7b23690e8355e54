use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use super::welcome::WelcomeView;

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/shopflow-web.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=WelcomeView />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found" />
        <div class="flex min-h-screen flex-col items-center justify-center bg-black text-white">
            <h1 class="mb-4 text-3xl font-bold">"Page Not Found"</h1>
            <A href="/" attr:class="text-[#f53003] hover:text-[#e02b00]">
                "Back to ShopFlow"
            </A>
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos_router::location::RequestUrl;

    #[test]
    fn not_found_links_home() {
        let html = Owner::new().with(|| {
            provide_context(RequestUrl::new("/missing"));
            view! {
                <Router>
                    <NotFound />
                </Router>
            }
            .to_html()
        });
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("Back to ShopFlow"));
    }
}
