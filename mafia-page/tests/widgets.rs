use mafia_page::{Page, PageConfig};
use pagedom::{Document, Element, Event, Key, Modifiers, MouseButton};

fn hero() -> Element {
    Element::div()
        .id("hero")
        .children((0..3).map(|i| {
            let slide = Element::div().id(format!("slide-{i}")).class("hero-slide");
            if i == 0 {
                slide.class("hero-slide-active")
            } else {
                slide
            }
        }))
        .child(Element::div().id("dots").children((0..3).map(|i| {
            let dot = Element::button().id(format!("dot-{i}")).class("hero-dot");
            if i == 0 { dot.class("dot-active") } else { dot }
        })))
}

fn role_card(id: &str, title: &str, full: &str) -> Element {
    Element::div()
        .id(id)
        .data("role-card", "")
        .child(
            Element::new("h3")
                .id(format!("{id}-title"))
                .class("role-card-title")
                .inner_text(format!("  {title}\n")),
        )
        .child(
            Element::div()
                .id(format!("{id}-full"))
                .class("role-card-full")
                .child(Element::new("p").inner_text(full)),
        )
}

fn modal_shell(name: &str, with_close: bool) -> Element {
    let dialog = Element::div()
        .id(format!("{name}-dialog"))
        .child(Element::new("h2").id(format!("{name}-modal-title")))
        .child(Element::div().id(format!("{name}-modal-text")));
    let dialog = if with_close {
        dialog.child(Element::button().id(format!("{name}-modal-close")))
    } else {
        dialog
    };
    Element::div().id(format!("{name}-modal")).child(dialog)
}

fn roles_page() -> Page {
    let body = Element::div()
        .id("body")
        .child(role_card("don", "Don", "Leads the mafia."))
        .child(role_card("cop", "Cop", "Checks one player per night."))
        .child(
            Element::div()
                .id("sport")
                .data("mode-card", "")
                .child(Element::span().class("mode-card-title").inner_text("Sport"))
                .child(Element::div().class("mode-card-full").markup("<b>10</b> players")),
        )
        .child(modal_shell("role", true))
        .child(modal_shell("mode", false));
    Page::mount(Document::new(body), &PageConfig::default())
}

fn is_open(page: &Page, backdrop: &str) -> bool {
    page.document()
        .get(backdrop)
        .unwrap()
        .has_class("role-modal-backdrop-open")
}

fn body_overflow(page: &Page) -> Option<&str> {
    page.document().body().get_style("overflow")
}

// ============================================================================
// Carousel
// ============================================================================

#[test]
fn test_carousel_dot_moves_markers() {
    let mut page = Page::mount(
        Document::new(Element::div().id("body").child(hero())),
        &PageConfig::default(),
    );

    page.dispatch(&Event::click("dot-2"));

    let doc = page.document();
    assert_eq!(page.carousel().unwrap().current(), 2);
    assert!(!doc.get("slide-0").unwrap().has_class("hero-slide-active"));
    assert!(!doc.get("dot-0").unwrap().has_class("dot-active"));
    assert!(doc.get("slide-2").unwrap().has_class("hero-slide-active"));
    assert!(doc.get("dot-2").unwrap().has_class("dot-active"));

    page.dispatch(&Event::click("dot-1"));
    let doc = page.document();
    assert!(!doc.get("slide-2").unwrap().has_class("hero-slide-active"));
    assert!(doc.get("slide-1").unwrap().has_class("hero-slide-active"));
}

#[test]
fn test_carousel_same_dot_keeps_marker() {
    let mut page = Page::mount(
        Document::new(Element::div().id("body").child(hero())),
        &PageConfig::default(),
    );
    page.dispatch(&Event::click("dot-0"));
    assert!(page.document().get("slide-0").unwrap().has_class("hero-slide-active"));
}

#[test]
fn test_carousel_needs_slides_and_dots() {
    let only_slides = Element::div()
        .id("body")
        .child(Element::div().id("s").class("hero-slide"));
    let page = Page::mount(Document::new(only_slides), &PageConfig::default());
    assert!(page.carousel().is_none());
}

#[test]
fn test_carousel_extra_dot_is_ignored() {
    let body = Element::div()
        .id("body")
        .child(Element::div().id("s0").class("hero-slide").class("hero-slide-active"))
        .child(Element::div().id("d0").class("hero-dot").class("dot-active"))
        .child(Element::div().id("d1").class("hero-dot"));
    let mut page = Page::mount(Document::new(body), &PageConfig::default());

    page.dispatch(&Event::click("d1"));

    assert_eq!(page.carousel().unwrap().current(), 0);
    assert!(page.document().get("s0").unwrap().has_class("hero-slide-active"));
    assert!(!page.document().get("d1").unwrap().has_class("dot-active"));
}

// ============================================================================
// Modal
// ============================================================================

#[test]
fn test_card_click_opens_modal_with_card_content() {
    let mut page = roles_page();

    page.dispatch(&Event::click("cop"));

    assert!(is_open(&page, "role-modal"));
    assert!(page.modal("role").unwrap().is_open());
    assert_eq!(body_overflow(&page), Some("hidden"));
    let doc = page.document();
    assert_eq!(doc.get("role-modal-title").unwrap().text_content(), "Cop");
    assert_eq!(
        doc.get("role-modal-text").unwrap().inner_html(),
        "<p>Checks one player per night.</p>"
    );
}

#[test]
fn test_click_inside_card_bubbles_to_card() {
    let mut page = roles_page();

    page.dispatch(&Event::click("don-full"));

    assert!(is_open(&page, "role-modal"));
    assert_eq!(
        page.document().get("role-modal-title").unwrap().text_content(),
        "Don"
    );
}

#[test]
fn test_close_button_closes() {
    let mut page = roles_page();
    page.dispatch(&Event::click("don"));

    page.dispatch(&Event::click("role-modal-close"));

    assert!(!is_open(&page, "role-modal"));
    assert_eq!(body_overflow(&page), None);
}

#[test]
fn test_backdrop_click_closes_but_dialog_click_does_not() {
    let mut page = roles_page();
    page.dispatch(&Event::click("don"));

    page.dispatch(&Event::click("role-dialog"));
    assert!(is_open(&page, "role-modal"));

    page.dispatch(&Event::click("role-modal-title"));
    assert!(is_open(&page, "role-modal"));

    page.dispatch(&Event::click("role-modal"));
    assert!(!is_open(&page, "role-modal"));
}

#[test]
fn test_escape_closes_and_other_keys_do_not() {
    let mut page = roles_page();
    page.dispatch(&Event::click("don"));

    page.dispatch(&Event::key(Key::Enter));
    assert!(is_open(&page, "role-modal"));

    page.dispatch(&Event::Key {
        target: Some("don".into()),
        key: Key::Escape,
        modifiers: Modifiers::shift(),
    });
    assert!(!is_open(&page, "role-modal"));
    assert_eq!(body_overflow(&page), None);
}

#[test]
fn test_modals_are_independent() {
    let mut page = roles_page();

    page.dispatch(&Event::click("sport"));

    assert!(is_open(&page, "mode-modal"));
    assert!(!is_open(&page, "role-modal"));
    let doc = page.document();
    assert_eq!(doc.get("mode-modal-title").unwrap().text_content(), "Sport");
    assert_eq!(
        doc.get("mode-modal-text").unwrap().inner_html(),
        "<b>10</b> players"
    );
    assert!(page.modal("mode").unwrap().close_id().is_none());

    page.dispatch(&Event::click("mode-modal"));
    assert!(!is_open(&page, "mode-modal"));
}

#[test]
fn test_card_without_parts_opens_empty() {
    let body = Element::div()
        .id("body")
        .child(Element::div().id("bare").data("role-card", ""))
        .child(modal_shell("role", true));
    let mut page = Page::mount(Document::new(body), &PageConfig::default());

    page.dispatch(&Event::click("bare"));

    assert!(is_open(&page, "role-modal"));
    let doc = page.document();
    assert_eq!(doc.get("role-modal-title").unwrap().text_content(), "");
    assert_eq!(doc.get("role-modal-text").unwrap().inner_html(), "");
}

#[test]
fn test_modal_not_mounted_without_text_element() {
    let body = Element::div()
        .id("body")
        .child(role_card("don", "Don", "Leads the mafia."))
        .child(
            Element::div()
                .id("role-modal")
                .child(Element::new("h2").id("role-modal-title")),
        );
    let mut page = Page::mount(Document::new(body), &PageConfig::default());

    assert!(page.modal("role").is_none());
    page.dispatch(&Event::click("don"));
    assert!(!is_open(&page, "role-modal"));
}

#[test]
fn test_secondary_button_and_unknown_targets_are_ignored() {
    let mut page = roles_page();

    page.dispatch(&Event::Click {
        target: Some("don".into()),
        button: MouseButton::Right,
    });
    assert!(!is_open(&page, "role-modal"));

    assert!(page.dispatch(&Event::click("nowhere")).is_empty());
    assert!(
        page.dispatch(&Event::Click {
            target: None,
            button: MouseButton::Left
        })
        .is_empty()
    );
}
