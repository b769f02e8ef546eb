//! DOM translation pass.
//!
//! One synchronous walk over annotated elements. Content annotations are
//! applied according to the element's kind; placeholder annotations always
//! target the `placeholder` attribute.

use crate::dom::Document;
use crate::i18n::TranslationDictionary;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Attribute naming the key for an element's content.
pub const CONTENT_ATTR: &str = "data-i18n";

/// Attributes naming the key for an element's placeholder. Both are aliases.
pub const PLACEHOLDER_ATTRS: [&str; 2] = ["data-i18n-placeholder", "data-i18n-ph"];

/// How a resolved content value lands on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<input type="submit|button">`: sets `value`
    SubmitLikeInput,
    /// `<optgroup>`: sets `label`
    OptGroup,
    /// `<option>`: sets text content, even if the value looks like markup
    OptionItem,
    /// Any other element whose value contains a tag: sets inner HTML
    HtmlContent,
    /// Everything else: sets text content
    PlainText,
}

impl ElementKind {
    /// Classify an element for a given translated value.
    ///
    /// Tag names and input types compare case-insensitively.
    pub fn classify(tag: &str, input_type: Option<&str>, value: &str) -> Self {
        if tag.eq_ignore_ascii_case("input")
            && input_type.is_some_and(|t| {
                t.eq_ignore_ascii_case("submit") || t.eq_ignore_ascii_case("button")
            })
        {
            ElementKind::SubmitLikeInput
        } else if tag.eq_ignore_ascii_case("optgroup") {
            ElementKind::OptGroup
        } else if tag.eq_ignore_ascii_case("option") {
            ElementKind::OptionItem
        } else if looks_like_html(value) {
            ElementKind::HtmlContent
        } else {
            ElementKind::PlainText
        }
    }
}

/// Permissive tag heuristic: a `<`, a letter, anything, then a `>`.
///
/// Dictionary content is trusted; markup is inserted as-is.
pub fn looks_like_html(value: &str) -> bool {
    static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
    TAG_PATTERN
        .get_or_init(|| Regex::new(r"(?i)<[a-z][\s\S]*>").expect("HTML tag pattern is valid"))
        .is_match(value)
}

/// Summary of one translation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Content-annotated elements that received a value
    pub translated: usize,
    /// Content keys that did not resolve, in document order
    pub missing: Vec<String>,
    /// Placeholder attributes that were set
    pub placeholders_set: usize,
    /// Placeholder annotations skipped (miss or empty value)
    pub placeholders_skipped: usize,
}

/// Apply `dictionary` to every annotated element of `doc`.
///
/// Runs to completion without suspending. Applying the same dictionary twice
/// leaves the document as applying it once.
pub fn apply<D: Document>(doc: &mut D, dictionary: &TranslationDictionary) -> ApplyReport {
    let mut report = ApplyReport::default();

    for element in doc.annotated(CONTENT_ATTR) {
        let Some(key) = doc.attribute(element, CONTENT_ATTR) else {
            continue;
        };

        let Some(text) = dictionary.resolve(&key) else {
            warn!("Translation missing for key: {}", key);
            report.missing.push(key);
            continue;
        };

        let tag = doc.tag_name(element);
        let input_type = doc.attribute(element, "type");
        match ElementKind::classify(&tag, input_type.as_deref(), text) {
            ElementKind::SubmitLikeInput => doc.set_attribute(element, "value", text),
            ElementKind::OptGroup => doc.set_attribute(element, "label", text),
            ElementKind::OptionItem | ElementKind::PlainText => doc.set_text_content(element, text),
            ElementKind::HtmlContent => doc.set_inner_html(element, text),
        }
        report.translated += 1;
    }

    for attr in PLACEHOLDER_ATTRS {
        for element in doc.annotated(attr) {
            let resolved = doc
                .attribute(element, attr)
                .and_then(|key| dictionary.resolve(&key).map(str::to_string));

            match resolved {
                Some(text) if !text.is_empty() => {
                    doc.set_attribute(element, "placeholder", &text);
                    report.placeholders_set += 1;
                }
                _ => report.placeholders_skipped += 1,
            }
        }
    }

    debug!(
        "Translation pass: {} translated, {} missing, {} placeholders",
        report.translated,
        report.missing.len(),
        report.placeholders_set
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Content, Element, Page};

    fn dict(json: &str) -> TranslationDictionary {
        TranslationDictionary::parse("en", json).expect("Should parse")
    }

    // ==================== Classification Tests ====================

    #[test]
    fn test_classify_submit_and_button_inputs() {
        assert_eq!(
            ElementKind::classify("INPUT", Some("submit"), "Send"),
            ElementKind::SubmitLikeInput
        );
        assert_eq!(
            ElementKind::classify("input", Some("Button"), "<b>Go</b>"),
            ElementKind::SubmitLikeInput
        );
    }

    #[test]
    fn test_classify_text_input_falls_through() {
        assert_eq!(
            ElementKind::classify("input", Some("text"), "Name"),
            ElementKind::PlainText
        );
        assert_eq!(
            ElementKind::classify("input", None, "Name"),
            ElementKind::PlainText
        );
    }

    #[test]
    fn test_classify_optgroup_and_option() {
        assert_eq!(
            ElementKind::classify("OPTGROUP", None, "Group"),
            ElementKind::OptGroup
        );
        assert_eq!(
            ElementKind::classify("option", None, "<i>x</i>"),
            ElementKind::OptionItem
        );
    }

    #[test]
    fn test_classify_html_vs_plain() {
        assert_eq!(
            ElementKind::classify("span", None, "<b>x</b>"),
            ElementKind::HtmlContent
        );
        assert_eq!(
            ElementKind::classify("p", None, "Line one<br>Line two"),
            ElementKind::HtmlContent
        );
        assert_eq!(
            ElementKind::classify("p", None, "1 < 2 and 3 > 2"),
            ElementKind::PlainText
        );
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<B>bold</B>"));
        assert!(looks_like_html("a <a href=\"#\">link</a>"));
        assert!(!looks_like_html("plain"));
        assert!(!looks_like_html("<>"));
        assert!(!looks_like_html("< b>"));
    }

    // ==================== Apply Tests ====================

    #[test]
    fn test_apply_headline() {
        let mut page = Page::new();
        let h1 = page.push(Element::new("h1").with_attr(CONTENT_ATTR, "hero.headline"));

        let report = apply(&mut page, &dict(r#"{"hero":{"headline":"Hi"}}"#));

        assert_eq!(page.element(h1).unwrap().content, Content::Text("Hi".into()));
        assert_eq!(report.translated, 1);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_apply_html_value() {
        let mut page = Page::new();
        let span = page.push(Element::new("span").with_attr(CONTENT_ATTR, "a.b"));

        apply(&mut page, &dict(r#"{"a":{"b":"<b>x</b>"}}"#));

        assert_eq!(
            page.element(span).unwrap().content,
            Content::Html("<b>x</b>".into())
        );
    }

    #[test]
    fn test_apply_missing_key_leaves_element() {
        let mut page = Page::new();
        let p = page.push(
            Element::new("p")
                .with_attr(CONTENT_ATTR, "missing.key")
                .with_text("original"),
        );

        let report = apply(&mut page, &dict(r#"{"hero":{"headline":"Hi"}}"#));

        assert_eq!(
            page.element(p).unwrap().content,
            Content::Text("original".into())
        );
        assert_eq!(report.missing, vec!["missing.key".to_string()]);
        assert_eq!(report.translated, 0);
    }

    #[test]
    fn test_apply_per_kind_targets() {
        let mut page = Page::new();
        let submit = page.push(
            Element::new("input")
                .with_attr("type", "submit")
                .with_attr(CONTENT_ATTR, "form.send"),
        );
        let group = page.push(Element::new("optgroup").with_attr(CONTENT_ATTR, "form.group"));
        let option = page.push(Element::new("option").with_attr(CONTENT_ATTR, "form.option"));

        apply(
            &mut page,
            &dict(r#"{"form":{"send":"Send","group":"Sports","option":"<Football>"}}"#),
        );

        let submit = page.element(submit).unwrap();
        assert_eq!(submit.attr("value"), Some("Send"));
        assert_eq!(submit.content, Content::default());

        let group = page.element(group).unwrap();
        assert_eq!(group.attr("label"), Some("Sports"));

        let option = page.element(option).unwrap();
        assert_eq!(option.content, Content::Text("<Football>".into()));
    }

    #[test]
    fn test_apply_empty_content_value_is_applied() {
        let mut page = Page::new();
        let p = page.push(
            Element::new("p")
                .with_attr(CONTENT_ATTR, "blank")
                .with_text("was here"),
        );

        let report = apply(&mut page, &dict(r#"{"blank":""}"#));

        assert_eq!(page.element(p).unwrap().content, Content::Text(String::new()));
        assert_eq!(report.translated, 1);
    }

    #[test]
    fn test_apply_placeholders_both_aliases() {
        let mut page = Page::new();
        let long = page.push(Element::new("input").with_attr("data-i18n-placeholder", "form.name"));
        let short = page.push(Element::new("textarea").with_attr("data-i18n-ph", "form.message"));

        let report = apply(
            &mut page,
            &dict(r#"{"form":{"name":"Your name","message":"Your message"}}"#),
        );

        assert_eq!(page.element(long).unwrap().attr("placeholder"), Some("Your name"));
        assert_eq!(
            page.element(short).unwrap().attr("placeholder"),
            Some("Your message")
        );
        assert_eq!(report.placeholders_set, 2);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_apply_placeholder_miss_and_empty_are_skipped_silently() {
        let mut page = Page::new();
        let missing = page.push(
            Element::new("input")
                .with_attr("data-i18n-ph", "form.none")
                .with_attr("placeholder", "keep"),
        );
        let empty = page.push(
            Element::new("input")
                .with_attr("data-i18n-placeholder", "form.empty")
                .with_attr("placeholder", "keep too"),
        );

        let report = apply(&mut page, &dict(r#"{"form":{"empty":""}}"#));

        assert_eq!(page.element(missing).unwrap().attr("placeholder"), Some("keep"));
        assert_eq!(page.element(empty).unwrap().attr("placeholder"), Some("keep too"));
        assert_eq!(report.placeholders_skipped, 2);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_apply_element_with_content_and_placeholder() {
        let mut page = Page::new();
        let el = page.push(
            Element::new("input")
                .with_attr("type", "button")
                .with_attr(CONTENT_ATTR, "b.label")
                .with_attr("data-i18n-ph", "b.hint"),
        );

        apply(&mut page, &dict(r#"{"b":{"label":"Go","hint":"Click"}}"#));

        let el = page.element(el).unwrap();
        assert_eq!(el.attr("value"), Some("Go"));
        assert_eq!(el.attr("placeholder"), Some("Click"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut page = Page::new();
        page.push(Element::new("h1").with_attr(CONTENT_ATTR, "hero.headline"));
        page.push(Element::new("span").with_attr(CONTENT_ATTR, "hero.rich"));
        page.push(Element::new("input").with_attr("data-i18n-ph", "hero.hint"));
        page.push(Element::new("p").with_attr(CONTENT_ATTR, "nope").with_text("x"));
        let d = dict(r#"{"hero":{"headline":"Hi","rich":"<em>a</em>","hint":"h"}}"#);

        apply(&mut page, &d);
        let once = page.clone();
        apply(&mut page, &d);

        assert_eq!(page, once);
    }

    #[test]
    fn test_apply_does_not_touch_document_language() {
        let mut page = Page::new();
        page.push(Element::new("h1").with_attr(CONTENT_ATTR, "a"));
        apply(&mut page, &dict(r#"{"a":"b"}"#));
        assert_eq!(page.lang, None);
    }
}
