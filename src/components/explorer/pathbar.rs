//! Path bar component.
//!
//! Displays the current directory at the bottom of the explorer with
//! clickable segments for its ancestors.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::state::ExplorerState;
use crate::components::icons as ic;
use crate::core::paths;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Segment data for path bar rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PathSegment {
    /// Display label
    label: String,
    /// Directory to load on click (None = current/disabled)
    target: Option<String>,
}

/// Split `dir` into root plus one segment per component. Every segment but
/// the last links to its directory.
fn segments(dir: &str) -> Vec<PathSegment> {
    let parts: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();

    let mut out = Vec::with_capacity(parts.len() + 1);
    out.push(PathSegment {
        label: paths::ROOT.to_string(),
        target: (!parts.is_empty()).then(|| paths::ROOT.to_string()),
    });

    let mut path = String::new();
    for (idx, part) in parts.iter().enumerate() {
        path.push('/');
        path.push_str(part);
        out.push(PathSegment {
            label: part.to_string(),
            target: (idx + 1 < parts.len()).then(|| path.clone()),
        });
    }
    out
}

/// Path bar component displayed at the bottom of the explorer.
#[component]
pub fn PathBar() -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    view! {
        <nav class=css::pathbar aria-label="Path">
            {move || {
                segments(&state.current_dir.get())
                    .into_iter()
                    .enumerate()
                    .map(|(idx, seg)| {
                        let icon = if idx == 0 { ic::STORAGE } else { ic::FOLDER };
                        view! {
                            {(idx > 0).then(|| view! { <span class=css::separator>"/"</span> })}
                            {match seg.target {
                                Some(dir) => view! {
                                    <button class=css::segment on:click=move |_| state.load(&dir)>
                                        <span class=css::icon><Icon icon=icon /></span>
                                        <span class=css::label>{seg.label}</span>
                                    </button>
                                }.into_any(),
                                None => view! {
                                    <button
                                        class=format!("{} {}", css::segment, css::segmentCurrent)
                                        disabled=true
                                    >
                                        <span class=css::icon><Icon icon=icon /></span>
                                        <span class=css::label>{seg.label}</span>
                                    </button>
                                }.into_any(),
                            }}
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(label: &str, target: Option<&str>) -> PathSegment {
        PathSegment {
            label: label.to_string(),
            target: target.map(String::from),
        }
    }

    #[test]
    fn test_root_only() {
        assert_eq!(segments("/"), vec![seg("/", None)]);
        assert_eq!(segments(""), vec![seg("/", None)]);
    }

    #[test]
    fn test_nested_links_ancestors() {
        assert_eq!(
            segments("/var/log/nginx"),
            vec![
                seg("/", Some("/")),
                seg("var", Some("/var")),
                seg("log", Some("/var/log")),
                seg("nginx", None),
            ]
        );
    }

    #[test]
    fn test_ignores_duplicate_slashes() {
        assert_eq!(
            segments("//data//x/"),
            vec![seg("/", Some("/")), seg("data", Some("/data")), seg("x", None)]
        );
    }
}
