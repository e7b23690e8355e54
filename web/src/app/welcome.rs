use leptos::prelude::*;
use leptos_meta::{Link, Title};
use leptos_router::components::A;

use shopflow_auth::FrontendUser;

use super::{
    props::{get_page_props, props_or_guest, PageProps},
    routes::{RouteName, RouteTable, FEATURES_ANCHOR, FEATURES_ID},
};
use crate::components::{cta_class, glass_panel_class, icons::ShopFlowLogo, nav_link_class};

pub const PAGE_TITLE: &str = "ShopFlow - POS & Inventory System";
pub const FONT_HOST: &str = "https://fonts.bunny.net";
pub const FONT_STYLESHEET: &str = "https://fonts.bunny.net/css?family=instrument-sans:400,500,600";

const BACKGROUND_STYLE: &str = "background-image: linear-gradient(rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.7)), url('/images/retail-bg.jpg'); background-size: cover; background-position: center; background-repeat: no-repeat;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Sales Management",
        description: "Process transactions quickly, manage customer orders, and track sales performance in real-time.",
    },
    Feature {
        title: "Inventory Control",
        description: "Keep track of stock levels, set reorder points, and manage product information effortlessly.",
    },
    Feature {
        title: "Customer Management",
        description: "Build customer profiles, track purchase history, and implement loyalty programs.",
    },
    Feature {
        title: "Reporting & Analytics",
        description: "Generate detailed reports on sales, inventory, and customer data to make informed business decisions.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTile {
    pub label: &'static str,
    pub caption: &'static str,
}

pub const ICON_TILES: [IconTile; 4] = [
    IconTile {
        label: "POS",
        caption: "Point of Sale",
    },
    IconTile {
        label: "INV",
        caption: "Inventory",
    },
    IconTile {
        label: "CRM",
        caption: "Customers",
    },
    IconTile {
        label: "RPT",
        caption: "Reporting",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub outlined: bool,
}

/// Header links for the visitor: the dashboard when signed in, otherwise
/// sign in and sign up.
pub fn nav_links(user: Option<&FrontendUser>, routes: &RouteTable) -> Vec<NavLink> {
    match user {
        Some(_) => vec![NavLink {
            label: "Dashboard",
            href: routes.route(RouteName::Dashboard),
            outlined: true,
        }],
        None => vec![
            NavLink {
                label: "Sign In",
                href: routes.route(RouteName::Login),
                outlined: false,
            },
            NavLink {
                label: "Sign Up",
                href: routes.route(RouteName::Register),
                outlined: true,
            },
        ],
    }
}

/// Route view for `/`.
#[component]
pub fn WelcomeView() -> impl IntoView {
    let props = Resource::new(|| (), |_| async { props_or_guest(get_page_props().await) });

    view! {
        <WelcomeHead />
        <Transition fallback=move || ()>
            {move || Suspend::new(async move {
                let PageProps { user, routes } = props.await;
                view! { <Welcome user routes /> }
            })}
        </Transition>
    }
}

#[component]
pub fn WelcomeHead() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />
        <Link rel="preconnect" href=FONT_HOST />
        <Link href=FONT_STYLESHEET rel="stylesheet" />
    }
}

#[component]
pub fn Welcome(user: Option<FrontendUser>, routes: RouteTable) -> impl IntoView {
    let register = routes.route(RouteName::Register);

    view! {
        <div
            class="flex min-h-screen flex-col items-center p-6 text-white lg:justify-center lg:p-8"
            style=BACKGROUND_STYLE
        >
            <header class="mb-6 w-full max-w-[1200px] text-sm">
                <nav class="flex items-center justify-between">
                    <div class="flex items-center">
                        <span class="text-2xl font-bold text-[#f53003]">"ShopFlow"</span>
                    </div>
                    <div class="flex items-center gap-4">
                        <AuthLinks user routes />
                    </div>
                </nav>
            </header>
            <div class="flex w-full items-center justify-center opacity-100 transition-opacity duration-750 lg:grow starting:opacity-0">
                <main class="flex w-full max-w-[1200px] flex-col-reverse lg:flex-row lg:gap-8">
                    <div class=glass_panel_class(Some("flex-1 p-8 shadow-lg"))>
                        <Hero />
                        <FeatureGrid />
                        <CallToAction register />
                    </div>
                    <IconPanel />
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn AuthLinks(user: Option<FrontendUser>, routes: RouteTable) -> impl IntoView {
    nav_links(user.as_ref(), &routes)
        .into_iter()
        .map(|link| {
            view! {
                <A href=link.href attr:class=nav_link_class(link.outlined)>
                    {link.label}
                </A>
            }
        })
        .collect_view()
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <h1 class="mb-4 text-3xl font-bold text-white">"Welcome to ShopFlow"</h1>
        <h2 class="mb-6 text-xl text-white/80">
            "Your All-in-One POS & Inventory Management Solution"
        </h2>
    }
}

#[component]
pub fn FeatureGrid() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="rounded-lg border border-white/10 bg-black/30 p-6 backdrop-blur-sm">
                    <h3 class="mb-2 text-lg font-medium text-[#f53003]">{feature.title}</h3>
                    <p class="text-white/80">{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div id=FEATURES_ID class="mb-8 grid grid-cols-1 gap-6 md:grid-cols-2">
            {cards}
        </div>
    }
}

#[component]
pub fn CallToAction(register: String) -> impl IntoView {
    view! {
        <div class="flex flex-col space-y-4 sm:flex-row sm:space-x-4 sm:space-y-0">
            <A href=register attr:class=cta_class(true)>
                "Get Started"
            </A>
            <a href=FEATURES_ANCHOR class=cta_class(false)>
                "Learn More"
            </a>
        </div>
    }
}

#[component]
pub fn IconPanel() -> impl IntoView {
    let tiles = ICON_TILES
        .iter()
        .map(|tile| {
            view! {
                <div class="flex flex-col items-center justify-center rounded-lg bg-white/10 p-4 text-center shadow-md backdrop-blur-sm">
                    <span class="text-3xl font-bold text-[#f53003]">{tile.label}</span>
                    <span class="mt-2 text-sm text-white/80">{tile.caption}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="relative mb-6 aspect-auto w-full lg:mb-0 lg:w-[500px]">
            <div class=glass_panel_class(Some("h-full w-full overflow-hidden"))>
                <div class="flex h-full flex-col items-center justify-center p-8">
                    <ShopFlowLogo />
                    <div class="mt-8 grid grid-cols-2 gap-4">{tiles}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos_router::{components::Router, location::RequestUrl};

    // Links are router-aware, so components render inside a router at `/`.
    fn render<V>(f: impl FnOnce() -> V + Send + 'static) -> String
    where
        V: IntoView + 'static,
    {
        Owner::new().with(|| {
            provide_context(RequestUrl::new("/"));
            view! { <Router>{f()}</Router> }.to_html()
        })
    }

    fn signed_in() -> Option<FrontendUser> {
        Some(FrontendUser {
            display_name: Some("Till 3".to_string()),
        })
    }

    fn custom_routes() -> RouteTable {
        RouteTable {
            dashboard: "/app/home".to_string(),
            login: "/app/sign-in".to_string(),
            register: "/app/join".to_string(),
        }
    }

    #[test]
    fn guest_gets_sign_in_and_sign_up() {
        let routes = RouteTable::default();
        let links = nav_links(None, &routes);
        let labels: Vec<_> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Sign In", "Sign Up"]);
        assert_eq!(links[0].href, routes.route(RouteName::Login));
        assert_eq!(links[1].href, routes.route(RouteName::Register));
    }

    #[test]
    fn signed_in_user_gets_dashboard_only() {
        let routes = RouteTable::default();
        let links = nav_links(signed_in().as_ref(), &routes);
        assert_eq!(
            links,
            [NavLink {
                label: "Dashboard",
                href: "/dashboard".to_string(),
                outlined: true,
            }]
        );
    }

    #[test]
    fn user_fields_do_not_affect_navigation() {
        let routes = RouteTable::default();
        let anonymous = FrontendUser { display_name: None };
        assert_eq!(
            nav_links(Some(&anonymous), &routes),
            nav_links(signed_in().as_ref(), &routes)
        );
    }

    #[test]
    fn guest_auth_links_render_two_anchors() {
        let html = render(|| view! { <AuthLinks user=None routes=custom_routes() /> });
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains("Sign In"));
        assert!(html.contains("Sign Up"));
        assert!(html.contains("href=\"/app/sign-in\""));
        assert!(html.contains("href=\"/app/join\""));
        assert!(!html.contains("Dashboard"));
    }

    #[test]
    fn signed_in_auth_links_render_one_anchor() {
        let html = render(|| view! { <AuthLinks user=signed_in() routes=custom_routes() /> });
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains("Dashboard"));
        assert!(html.contains("href=\"/app/home\""));
        assert!(!html.contains("Sign In"));
        assert!(!html.contains("Sign Up"));
    }

    #[test]
    fn page_has_four_feature_cards_in_both_auth_states() {
        for user in [None, signed_in()] {
            let html = render(move || view! { <Welcome user routes=RouteTable::default() /> });
            assert_eq!(html.matches("<h3").count(), 4);
            for feature in FEATURES {
                assert!(html.contains(&feature.title.replace('&', "&amp;")));
                assert!(html.contains(feature.description));
            }
        }
    }

    #[test]
    fn feature_titles_are_fixed() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "Sales Management",
                "Inventory Control",
                "Customer Management",
                "Reporting & Analytics",
            ]
        );
    }

    #[test]
    fn get_started_targets_the_sign_up_route() {
        let routes = custom_routes();
        let sign_up = nav_links(None, &routes)
            .into_iter()
            .find(|l| l.label == "Sign Up")
            .map(|l| l.href);
        assert_eq!(sign_up.as_deref(), Some("/app/join"));

        // guest page: sign up and get started
        let html = render(|| view! { <Welcome user=None routes=custom_routes() /> });
        assert_eq!(html.matches("href=\"/app/join\"").count(), 2);
        // signed in: only get started remains
        let html = render(|| view! { <Welcome user=signed_in() routes=custom_routes() /> });
        assert_eq!(html.matches("href=\"/app/join\"").count(), 1);
    }

    #[test]
    fn call_to_action_links_register_and_features_anchor() {
        let html = render(|| view! { <CallToAction register="/register".to_string() /> });
        assert!(html.contains("Get Started"));
        assert!(html.contains("Learn More"));
        assert!(html.contains("href=\"/register\""));
        assert!(html.contains("href=\"#features\""));
    }

    #[test]
    fn feature_grid_is_the_anchor_target() {
        let html = render(|| view! { <FeatureGrid /> });
        assert!(html.contains("id=\"features\""));
    }

    #[test]
    fn icon_panel_renders_tiles_in_order() {
        let html = render(|| view! { <IconPanel /> });
        let positions: Vec<_> = ["POS", "INV", "CRM", "RPT"]
            .iter()
            .map(|label| {
                assert_eq!(html.matches(label).count(), 1, "{label}");
                html.find(label).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn hero_text_is_present() {
        let html = render(|| view! { <Welcome user=None routes=RouteTable::default() /> });
        assert!(html.contains("Welcome to ShopFlow"));
        assert!(html.contains("ShopFlow</span>"));
        assert!(html.contains("/images/retail-bg.jpg"));
    }
}
