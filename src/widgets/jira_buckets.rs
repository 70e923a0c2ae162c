use crate::components::board::NoItemsInfo;
use crate::models::JiraBucket;
use crate::util::json_int;
use leptos::prelude::*;

pub(crate) const COLOR_RED: &str = "#e55c5c";
pub(crate) const COLOR_YELLOW: &str = "#f5c342";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ThresholdLevel {
    Error,
    Warning,
}

impl ThresholdLevel {
    pub fn color(self) -> &'static str {
        match self {
            ThresholdLevel::Error => COLOR_RED,
            ThresholdLevel::Warning => COLOR_YELLOW,
        }
    }
}

/// A threshold of 0 (or one that does not parse) is disabled.
pub(crate) fn check_threshold(
    issue_counts: i64,
    error_threshold: Option<i64>,
    warning_threshold: Option<i64>,
) -> Option<ThresholdLevel> {
    let reached = |t: Option<i64>| matches!(t, Some(t) if t != 0 && issue_counts >= t);

    if reached(error_threshold) {
        Some(ThresholdLevel::Error)
    } else if reached(warning_threshold) {
        Some(ThresholdLevel::Warning)
    } else {
        None
    }
}

pub(crate) fn bucket_level(bucket: &JiraBucket) -> Option<ThresholdLevel> {
    check_threshold(
        bucket.issue_counts,
        json_int(&bucket.error_threshold),
        json_int(&bucket.warning_threshold),
    )
}

fn color_style(level: Option<ThresholdLevel>) -> String {
    level
        .map(|l| format!("color: {};", l.color()))
        .unwrap_or_default()
}

#[component]
pub fn JiraBucketsWidget(#[prop(into)] buckets: Signal<Vec<JiraBucket>>) -> impl IntoView {
    move || {
        let buckets = buckets.get();
        if buckets.is_empty() {
            return view! { <NoItemsInfo message="Buckets List Empty" /> }.into_any();
        }

        view! {
            <div class="overflow-hidden">
                <table class="w-full text-sm">
                    <thead>
                        <tr class="text-left text-xs text-muted-foreground">
                            <th class="py-1">"Bucket"</th>
                            <th class="py-1">"Issues"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {buckets
                            .into_iter()
                            .map(|bucket| {
                                let style = color_style(bucket_level(&bucket));
                                view! {
                                    <tr data-bucket-id=bucket.id.clone()>
                                        <td class="py-1">
                                            <a
                                                href=bucket.url.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                style=style.clone()
                                            >
                                                {bucket.name.clone()}
                                            </a>
                                        </td>
                                        <td class="py-1" style=style>
                                            {bucket.issue_counts.to_string()}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    }
}
