use itertools::Itertools;
use scraper::{ElementRef, Selector};

/// First direct text node of the first element matching the selector
pub fn select_own_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .flat_map(own_text_nodes)
        .next()
}

/// Direct text nodes of every matching element, in match order
pub fn select_all_own_text(scope: ElementRef, selector: &Selector) -> Vec<String> {
    scope.select(selector).flat_map(own_text_nodes).collect()
}

/// Attribute of the first matching element that has it
pub fn select_attr(scope: ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .find_map(|el| el.value().attr(attr))
        .map(str::to_string)
}

pub fn join_fragments(fragments: &[String]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .join(" ")
}

fn own_text_nodes(el: ElementRef) -> Vec<String> {
    el.children()
        .filter_map(|child| child.value().as_text().map(|text| text.to_string()))
        .collect()
}
