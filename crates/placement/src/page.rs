//! Page context and the script enqueue decision.

/// Flags describing the page currently being rendered, supplied by the
/// host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageContext {
    pub is_product_page: bool,
    pub is_cart_page: bool,
    pub content_has_shortcode: bool,
}

/// Whether the widget scripts should be enqueued for this page.
///
/// Product and cart pages always enqueue. Elsewhere, the *absence* of the
/// shortcode is the fallback trigger: scripts load unless the content
/// explicitly carries the shortcode and we are on neither page type. The
/// inclusive OR with a negated third term is intentional; do not simplify
/// to "enqueue only when the shortcode is present".
pub fn should_enqueue(page: &PageContext) -> bool {
    page.is_product_page || page.is_cart_page || !page.content_has_shortcode
}
