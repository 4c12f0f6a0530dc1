//! Title, list, and link detection over raw page text.

use crate::error::{Error, Result};
use crate::model::Link;
use regex::Regex;

/// Titles, list items, and links found on one page, in scan order.
///
/// Duplicates are preserved: two identical headings are two entries.
#[derive(Debug, Clone, Default)]
pub struct MarkdownElements {
    /// Title lines (`#` through `######`)
    pub titles: Vec<String>,

    /// List item lines, ordered items before unordered items
    pub lists: Vec<String>,

    /// Links, Markdown-style links before autolinks
    pub links: Vec<Link>,
}

/// Line-oriented scanner for Markdown structure.
///
/// Pure over its input: scanning the same text twice yields identical
/// sequences, and the text is never modified.
pub struct MarkdownScanner {
    title_regex: Regex,
    ordered_list_regex: Regex,
    unordered_list_regex: Regex,
    link_regex: Regex,
    autolink_regex: Regex,
}

impl MarkdownScanner {
    /// Compile the scan patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            title_regex: compile(r"(?m)^\s*#{1,6}\s+.+$")?,
            ordered_list_regex: compile(r"(?m)^\s*\d+[.)]\s+.+")?,
            unordered_list_regex: compile(r"(?m)^\s*[-*+]\s+.+")?,
            link_regex: compile(r"\[([^\]]+)\]\(([^)]+)\)")?,
            autolink_regex: compile(r"<(https?://[^>]+)>")?,
        })
    }

    /// Scan one page's text for titles, lists, and links.
    pub fn scan(&self, text: &str) -> MarkdownElements {
        MarkdownElements {
            titles: self.scan_titles(text),
            lists: self.scan_lists(text),
            links: self.scan_links(text),
        }
    }

    /// Find title lines in document order.
    pub fn scan_titles(&self, text: &str) -> Vec<String> {
        self.title_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Find list item lines: ordered items first, then unordered items,
    /// each group in document order.
    pub fn scan_lists(&self, text: &str) -> Vec<String> {
        let mut lists: Vec<String> = self
            .ordered_list_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        lists.extend(
            self.unordered_list_regex
                .find_iter(text)
                .map(|m| m.as_str().to_string()),
        );
        lists
    }

    /// Find links: bracketed Markdown links first, then bare autolinks,
    /// each group in document order.
    pub fn scan_links(&self, text: &str) -> Vec<Link> {
        let mut links: Vec<Link> = self
            .link_regex
            .captures_iter(text)
            .map(|caps| Link::new(&caps[1], &caps[2]))
            .collect();
        links.extend(
            self.autolink_regex
                .captures_iter(text)
                .map(|caps| Link::bare(&caps[1])),
        );
        links
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Scan(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> MarkdownScanner {
        MarkdownScanner::new().unwrap()
    }

    #[test]
    fn test_scan_titles_all_levels() {
        let text = "# One\n## Two\n###### Six\n####### Seven";
        let titles = scanner().scan_titles(text);
        // Seven '#' never leaves whitespace after the 1-6 run, so it is
        // not a title.
        assert_eq!(titles.len(), 3);
        assert_eq!(titles[0], "# One");
        assert!(titles[2].contains("###### Six"));
    }

    #[test]
    fn test_scan_titles_requires_content() {
        let text = "#\nplain line";
        assert!(scanner().scan_titles(text).is_empty());
    }

    #[test]
    fn test_scan_titles_preserves_duplicates() {
        let text = "# Same\nbody\n# Same";
        let titles = scanner().scan_titles(text);
        assert_eq!(titles.len(), 2);
    }

    #[test]
    fn test_scan_lists_ordered_before_unordered() {
        let text = "- bullet\n1. first\n2) second\n* star";
        let lists = scanner().scan_lists(text);
        assert_eq!(lists.len(), 4);
        // Ordered matches lead regardless of document position
        assert!(lists[0].contains("1. first"));
        assert!(lists[1].contains("2) second"));
        assert!(lists[2].contains("- bullet"));
        assert!(lists[3].contains("* star"));
    }

    #[test]
    fn test_scan_links_markdown_then_autolink() {
        let text = "see <http://b.test> and [doc](http://a.test)";
        let links = scanner().scan_links(text);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], Link::new("doc", "http://a.test"));
        assert_eq!(links[1], Link::bare("http://b.test"));
    }

    #[test]
    fn test_scan_links_image_syntax_counts_as_link() {
        // The bracket pattern does not exclude a leading '!', so inline
        // images contribute a link entry as well.
        let text = "![alt](http://img.test/a.png)";
        let links = scanner().scan_links(text);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "alt");
    }

    #[test]
    fn test_scan_empty_text_yields_empty_sequences() {
        let elements = scanner().scan("");
        assert!(elements.titles.is_empty());
        assert!(elements.lists.is_empty());
        assert!(elements.links.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let text = "# T\n- a\n1. b\n[x](http://x.test)";
        let s = scanner();
        let first = s.scan(text);
        let second = s.scan(text);
        assert_eq!(first.titles, second.titles);
        assert_eq!(first.lists, second.lists);
        assert_eq!(first.links, second.links);
    }
}
