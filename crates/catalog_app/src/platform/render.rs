use std::fmt::Write;

use catalog_core::{AppViewModel, Banner, DetailPage, DetailView, ModelCardView, Severity};

/// Renders the view model as plain text for the terminal.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    match &view.detail {
        DetailView::Hidden => render_landing(&mut out, view),
        DetailView::Loading => out.push_str("Loading...\n"),
        DetailView::Failed(banner) => {
            push_banner(&mut out, banner);
            out.push_str("<- Back to Home\n");
        }
        DetailView::Ready(page) => render_detail(&mut out, page),
    }
    out
}

fn render_landing(out: &mut String, view: &AppViewModel) {
    out.push_str("Discover AI Models\n");
    if let Some(stats) = &view.stats {
        let _ = writeln!(
            out,
            "[{}] [{}] [{}]",
            stats.models_label, stats.categories_label, stats.languages_label
        );
    }
    out.push('\n');

    if view.search.loading {
        out.push_str("Searching...\n");
    }
    if let Some(banner) = &view.search.banner {
        push_banner(out, banner);
    }
    if let Some(heading) = &view.search.heading {
        let _ = writeln!(out, "{heading}");
        for card in &view.search.results {
            push_card(out, card);
        }
        out.push('\n');
    }

    if !view.trending.is_empty() {
        out.push_str("Trending Now\n");
        for card in &view.trending {
            push_card(out, card);
        }
    }

    if let Some(hint) = &view.empty_hint {
        let _ = writeln!(out, "{hint}");
    }
}

fn render_detail(out: &mut String, page: &DetailPage) {
    if let Some(warning) = &page.warning {
        push_banner(out, warning);
    }
    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{}", page.author_line);
    if !page.chips.is_empty() {
        let chips: Vec<String> = page.chips.iter().map(|chip| format!("[{chip}]")).collect();
        let _ = writeln!(out, "{}", chips.join(" "));
    }
    if !page.metrics.is_empty() {
        let metrics: Vec<String> = page
            .metrics
            .iter()
            .map(|metric| format!("{}: {}", metric.label, metric.value))
            .collect();
        let _ = writeln!(out, "{}", metrics.join(" | "));
    }
    for date in &page.dates {
        let _ = writeln!(out, "{date}");
    }
    if let Some(base) = &page.derived_from {
        let _ = writeln!(out, "Derived From: {} ({})", base.label, base.route);
    }
    if !page.datasets.is_empty() {
        let _ = writeln!(out, "Training Datasets: {}", page.datasets.join(", "));
    }
    let _ = writeln!(out, "View on HuggingFace: {}", page.hub_url);
}

fn push_banner(out: &mut String, banner: &Banner) {
    let marker = match banner.severity {
        Severity::Warning => "!",
        Severity::Error => "x",
    };
    let _ = writeln!(out, "{marker} {}", banner.text);
}

fn push_card(out: &mut String, card: &ModelCardView) {
    let mut line = format!("  {}  {}", card.id, card.author_line);
    if let Some(tag) = &card.pipeline_tag {
        let _ = write!(line, "  [{tag}]");
    }
    if let Some(likes) = &card.likes {
        let _ = write!(line, "  likes {likes}");
    }
    if let Some(downloads) = &card.downloads {
        let _ = write!(line, "  downloads {downloads}");
    }
    if let Some(score) = &card.trending_score {
        let _ = write!(line, "  trending {score}");
    }
    if let Some(derivatives) = &card.derivatives {
        let _ = write!(line, "  {derivatives}");
    }
    let _ = writeln!(out, "{line}");
    let _ = writeln!(out, "    {}", card.route);
}

#[cfg(test)]
mod tests {
    use catalog_core::{LinkView, MetricView, SearchView, StatsView};

    use super::*;

    fn card(id: &str) -> ModelCardView {
        ModelCardView {
            id: id.to_string(),
            route: format!("/model/{}", id.replace('/', "%2F")),
            author_line: "by org".to_string(),
            pipeline_tag: Some("text-generation".to_string()),
            likes: Some("1,200".to_string()),
            downloads: None,
            trending_score: None,
            derivatives: Some("3 derivatives".to_string()),
        }
    }

    #[test]
    fn landing_lists_results_before_trending() {
        let view = AppViewModel {
            route: "/".to_string(),
            stats: Some(StatsView {
                models_label: "331K+ Models".to_string(),
                categories_label: "30+ Categories".to_string(),
                languages_label: "184+ Languages".to_string(),
            }),
            search: SearchView {
                heading: Some("Search Results (1)".to_string()),
                results: vec![card("org/a")],
                ..SearchView::default()
            },
            trending: vec![card("org/hot")],
            ..AppViewModel::default()
        };

        let text = render(&view);

        assert!(text.contains("[331K+ Models] [30+ Categories] [184+ Languages]"));
        assert!(text.contains("  org/a  by org  [text-generation]  likes 1,200  3 derivatives"));
        assert!(text.contains("    /model/org%2Fa"));
        let results_at = text.find("Search Results (1)").unwrap();
        let trending_at = text.find("Trending Now").unwrap();
        assert!(results_at < trending_at);
        assert!(!text.contains('!'));
    }

    #[test]
    fn advisory_banner_is_rendered_with_results() {
        let view = AppViewModel {
            search: SearchView {
                banner: Some(Banner {
                    severity: Severity::Warning,
                    text: "too broad".to_string(),
                }),
                heading: Some("Search Results (1)".to_string()),
                results: vec![card("org/a")],
                ..SearchView::default()
            },
            ..AppViewModel::default()
        };

        let text = render(&view);
        assert!(text.contains("! too broad\n"));
        assert!(text.contains("Search Results (1)"));
    }

    #[test]
    fn detail_page_shows_lineage_and_datasets() {
        let view = AppViewModel {
            route: "/model/org%2Fmodel-a".to_string(),
            detail: DetailView::Ready(Box::new(DetailPage {
                title: "org/model-a".to_string(),
                author_line: "by org".to_string(),
                warning: None,
                chips: vec!["text-generation".to_string(), "Gated".to_string()],
                metrics: vec![MetricView {
                    label: "Likes",
                    value: "1,500".to_string(),
                }],
                dates: vec!["Created: 2024-01-15".to_string()],
                derived_from: Some(LinkView {
                    label: "org/model-b".to_string(),
                    route: "/model/org%2Fmodel-b".to_string(),
                }),
                datasets: vec!["c4".to_string(), "wikitext".to_string()],
                hub_url: "https://huggingface.co/org/model-a".to_string(),
            })),
            ..AppViewModel::default()
        };

        let text = render(&view);
        assert!(text.starts_with("org/model-a\nby org\n[text-generation] [Gated]\n"));
        assert!(text.contains("Likes: 1,500"));
        assert!(text.contains("Derived From: org/model-b (/model/org%2Fmodel-b)"));
        assert!(text.contains("Training Datasets: c4, wikitext"));
        assert!(text.contains("View on HuggingFace: https://huggingface.co/org/model-a"));
    }

    #[test]
    fn not_found_is_an_error_banner() {
        let view = AppViewModel {
            detail: DetailView::Failed(Banner {
                severity: Severity::Error,
                text: "Model not found".to_string(),
            }),
            ..AppViewModel::default()
        };

        assert_eq!(render(&view), "x Model not found\n<- Back to Home\n");
    }
}
