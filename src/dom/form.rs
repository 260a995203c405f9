//! Search form extraction
//!
//! Swaps the form around the configured search input for an empty,
//! relatively positioned container the autocomplete UI can be mounted in.

use super::DomTree;
use crate::utils::DomError;

/// Selector used to find the submit button of the original form
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"input[type="submit"]"#;

/// Container created in place of the form, plus the form's submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormContainerPair<N> {
    /// Empty `div` now sitting where the form was
    pub container: N,
    /// Submit button of the detached form, if it had one
    pub submit_button: Option<N>,
}

/// Nearest node, starting at `start` itself, for which `predicate` holds.
///
/// Follows parent links iteratively and stops at the top of the element chain.
pub fn closest_ancestor<D, P>(dom: &D, start: D::Node, mut predicate: P) -> Option<D::Node>
where
    D: DomTree + ?Sized,
    P: FnMut(&D, D::Node) -> bool,
{
    let mut current = Some(start);
    while let Some(node) = current {
        if predicate(dom, node) {
            return Some(node);
        }
        current = dom.parent_element(node);
    }
    None
}

/// Replace the form enclosing `input_selector` with a fresh container.
///
/// The selector must match exactly one element. The form is detached, not
/// dropped: its handle stays valid and the returned submit button still
/// points into it. Calling this twice with the same selector fails the
/// second time since the input left the document with its form.
pub fn get_container_and_button<D>(
    dom: &mut D,
    input_selector: &str,
) -> Result<FormContainerPair<D::Node>, DomError>
where
    D: DomTree + ?Sized,
{
    let inputs = dom.query_selector_all(input_selector)?;
    let input = match inputs.as_slice() {
        [] => return Err(DomError::SelectorNotFound(input_selector.to_string())),
        [input] => *input,
        many => {
            return Err(DomError::SelectorAmbiguous {
                selector: input_selector.to_string(),
                count: many.len(),
            });
        }
    };

    let form = closest_ancestor(&*dom, input, |dom, node| {
        dom.tag_name(node)
            .is_some_and(|tag| tag.eq_ignore_ascii_case("form"))
    })
    .ok_or_else(|| DomError::FormNotFound(input_selector.to_string()))?;

    let submit_button = dom.query_selector_within(form, SUBMIT_BUTTON_SELECTOR)?;

    let container = dom.create_element("div", &[("style", "position: relative")])?;
    dom.replace_node(form, container)?;

    log::debug!(
        "Mounted search container for '{}' (submit button: {})",
        input_selector,
        submit_button.is_some()
    );

    Ok(FormContainerPair {
        container,
        submit_button,
    })
}
