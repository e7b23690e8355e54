pub mod icons;

/// Header navigation link; `outlined` gives the frosted, bordered variant.
pub fn nav_link_class(outlined: bool) -> &'static str {
    if outlined {
        "inline-block rounded-sm border border-white/20 bg-white/10 px-5 py-1.5 text-sm leading-normal text-white backdrop-blur-sm hover:bg-white/20"
    } else {
        "inline-block rounded-sm border border-transparent px-5 py-1.5 text-sm leading-normal text-white hover:bg-white/10"
    }
}

pub fn cta_class(primary: bool) -> String {
    let colors = if primary {
        "border-[#f53003] bg-[#f53003] text-white hover:bg-[#e02b00]"
    } else {
        "border-white/20 bg-white/10 backdrop-blur-sm hover:bg-white/20"
    };
    format!("flex items-center justify-center rounded-sm border px-6 py-2 text-center {colors}")
}

pub fn glass_panel_class(extra_classes: Option<&str>) -> String {
    let extra_classes = extra_classes.unwrap_or_default();
    format!("rounded-lg bg-black/50 backdrop-blur-md {extra_classes}")
}
