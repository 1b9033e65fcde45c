use leptos::prelude::*;

/// The subtitle/title block that opens each content section.
#[component]
pub fn SectionHeading(
    /// Short lead-in line, e.g. "Our Story"
    #[prop(into)]
    subtitle: String,
    /// The section title, e.g. "About Pub Crawl"
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="section-subtitle">{subtitle}</h2>
            <h3 class="section-title">{title}</h3>
        </div>
    }
}
