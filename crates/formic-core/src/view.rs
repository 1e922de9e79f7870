//! Retained view handles standing in for the host toolkit's native widgets.
//!
//! A [`View`] is a cheaply clonable handle over a shared property bag. The
//! form layer mutates properties through it while an item is under
//! construction, and the headless backend lets tests observe exactly what a
//! native widget would have received: text, colors, padding, compound
//! drawables, children, and attached callbacks.
//!
//! Handles are reference counted and single-threaded (`Rc`), matching the
//! host environment where all view mutation happens on the UI thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::drawable::Drawable;
use crate::resource::Background;

/// What kind of native widget a view stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewKind {
    /// Vertical container that holds children.
    Group,
    /// Undifferentiated view (spaces, separator lines).
    Plain,
    /// Static text element.
    Text,
    /// Clickable button.
    Button,
    /// Single-line text editor.
    EditText,
    /// Wrapper layout that decorates a text editor with a floating hint.
    InputLayout,
    /// Text editor with completion suggestions.
    AutoComplete,
    /// Two-state switch with a label.
    Switch,
}

/// Width or height request passed to the container's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutSize {
    /// Fill the parent on this axis.
    MatchParent,
    /// Size to content.
    WrapContent,
    /// Exact size in pixels.
    Px(i32),
}

/// Placement of a view or its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gravity {
    /// Leading edge.
    Start,
    /// Trailing edge.
    End,
    /// Centered on both axes.
    Center,
    /// Centered vertically only.
    CenterVertical,
}

/// Visibility of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Rendered and occupying space.
    Visible,
    /// Not rendered and occupying no space.
    Gone,
}

/// How overlong single-line text is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ellipsize {
    /// Ellipsis at the start.
    Start,
    /// Ellipsis in the middle.
    Middle,
    /// Ellipsis at the end.
    End,
    /// Scrolling marquee.
    Marquee,
}

/// Typeface family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Typeface {
    /// Default sans-serif family.
    SansSerif,
    /// Serif family.
    Serif,
    /// Monospace family.
    Monospace,
    /// A family known to the host by name.
    Named(String),
}

/// Typeface style applied on top of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    /// Regular weight and posture.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
    /// Italic posture.
    Italic,
    /// Bold and italic.
    BoldItalic,
}

/// Keyboard class requested by an editable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    /// Plain text.
    Text,
    /// Text with sentence capitalization.
    TextCapSentences,
    /// Numeric input.
    Number,
    /// Email address input.
    Email,
    /// Obscured password input.
    Password,
}

/// Per-side padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Leading edge.
    pub start: i32,
    /// Top edge.
    pub top: i32,
    /// Trailing edge.
    pub end: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl Padding {
    /// Uniform padding on all four sides.
    #[must_use]
    pub const fn uniform(px: i32) -> Self {
        Self {
            start: px,
            top: px,
            end: px,
            bottom: px,
        }
    }
}

/// Click callback attached to a view.
pub type ClickHandler = Rc<dyn Fn(&View)>;
/// Checked-change callback attached to a switch view.
pub type CheckedChangeHandler = Rc<dyn Fn(&View, bool)>;
/// Text-change callback attached to an editable view.
pub type TextWatcher = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct Callbacks {
    on_click: Option<ClickHandler>,
    on_checked_change: Option<CheckedChangeHandler>,
    text_watchers: Vec<TextWatcher>,
}

struct ViewData {
    kind: ViewKind,
    id: Option<i32>,
    text: String,
    hint: String,
    text_color: Color,
    text_size_px: Option<f32>,
    typeface: Option<Typeface>,
    font_style: FontStyle,
    padding: Padding,
    background: Option<Background>,
    width: LayoutSize,
    height: LayoutSize,
    layout_gravity: Option<Gravity>,
    content_gravity: Option<Gravity>,
    visibility: Visibility,
    enabled: bool,
    focusable: bool,
    single_line: bool,
    ellipsize: Option<Ellipsize>,
    checked: bool,
    input_type: Option<InputType>,
    compound_drawables: [Option<Drawable>; 4],
    compound_drawable_padding: Option<i32>,
    // Switch extras
    shows_switch_text: bool,
    switch_text_on: Option<String>,
    switch_text_off: Option<String>,
    switch_typeface: Option<Typeface>,
    // Autocomplete extras
    completion_threshold: i32,
    completions: Vec<String>,
    completes_on_touch: bool,
    // Input layout extras
    password_toggle: bool,
    children: Vec<View>,
    parent: Option<Weak<RefCell<ViewData>>>,
    callbacks: Callbacks,
}

impl ViewData {
    fn new(kind: ViewKind) -> Self {
        let focusable = matches!(
            kind,
            ViewKind::Button | ViewKind::EditText | ViewKind::AutoComplete | ViewKind::Switch
        );
        Self {
            kind,
            id: None,
            text: String::new(),
            hint: String::new(),
            text_color: Color::BLACK,
            text_size_px: None,
            typeface: None,
            font_style: FontStyle::Normal,
            padding: Padding::default(),
            background: None,
            width: LayoutSize::WrapContent,
            height: LayoutSize::WrapContent,
            layout_gravity: None,
            content_gravity: None,
            visibility: Visibility::Visible,
            enabled: true,
            focusable,
            single_line: false,
            ellipsize: None,
            checked: false,
            input_type: None,
            compound_drawables: [None, None, None, None],
            compound_drawable_padding: None,
            shows_switch_text: false,
            switch_text_on: None,
            switch_text_off: None,
            switch_typeface: None,
            completion_threshold: 2,
            completions: Vec::new(),
            completes_on_touch: false,
            password_toggle: false,
            children: Vec::new(),
            parent: None,
            callbacks: Callbacks::default(),
        }
    }
}

/// Handle to a native view stand-in.
///
/// Clones share the same underlying view; equality is handle identity.
#[derive(Clone)]
pub struct View {
    inner: Rc<RefCell<ViewData>>,
}

impl View {
    /// Create a detached view of the given kind.
    #[must_use]
    pub fn new(kind: ViewKind) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewData::new(kind))),
        }
    }

    /// Whether two handles refer to the same view.
    #[must_use]
    pub fn same_view(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The kind of native widget this view stands in for.
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        self.inner.borrow().kind
    }

    /// Whether this view can hold children.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.kind(), ViewKind::Group | ViewKind::InputLayout)
    }

    /// The view id, if one was assigned.
    #[must_use]
    pub fn id(&self) -> Option<i32> {
        self.inner.borrow().id
    }

    /// Assign a view id.
    pub fn set_id(&self, id: i32) {
        self.inner.borrow_mut().id = Some(id);
    }

    /// Current text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// Set the text content and notify text watchers.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        let watchers = {
            let mut data = self.inner.borrow_mut();
            data.text = text.clone();
            data.callbacks.text_watchers.clone()
        };
        for watcher in watchers {
            watcher(&text);
        }
    }

    /// Current hint text.
    #[must_use]
    pub fn hint(&self) -> String {
        self.inner.borrow().hint.clone()
    }

    /// Set the hint text.
    pub fn set_hint(&self, hint: impl Into<String>) {
        self.inner.borrow_mut().hint = hint.into();
    }

    /// Current text color.
    #[must_use]
    pub fn text_color(&self) -> Color {
        self.inner.borrow().text_color
    }

    /// Set the text color.
    pub fn set_text_color(&self, color: Color) {
        self.inner.borrow_mut().text_color = color;
    }

    /// Text size in pixels, `None` when the platform default applies.
    #[must_use]
    pub fn text_size_px(&self) -> Option<f32> {
        self.inner.borrow().text_size_px
    }

    /// Set the text size in pixels.
    pub fn set_text_size_px(&self, px: f32) {
        self.inner.borrow_mut().text_size_px = Some(px);
    }

    /// Current typeface, `None` when the platform default applies.
    #[must_use]
    pub fn typeface(&self) -> Option<Typeface> {
        self.inner.borrow().typeface.clone()
    }

    /// Set or clear the typeface.
    pub fn set_typeface(&self, typeface: Option<Typeface>) {
        self.inner.borrow_mut().typeface = typeface;
    }

    /// Current font style.
    #[must_use]
    pub fn font_style(&self) -> FontStyle {
        self.inner.borrow().font_style
    }

    /// Set the font style.
    pub fn set_font_style(&self, style: FontStyle) {
        self.inner.borrow_mut().font_style = style;
    }

    /// Current per-side padding.
    #[must_use]
    pub fn padding(&self) -> Padding {
        self.inner.borrow().padding
    }

    /// Set the per-side padding.
    pub fn set_padding(&self, padding: Padding) {
        self.inner.borrow_mut().padding = padding;
    }

    /// Current background, `None` when the platform default applies.
    #[must_use]
    pub fn background(&self) -> Option<Background> {
        self.inner.borrow().background
    }

    /// Set the background.
    pub fn set_background(&self, background: Background) {
        self.inner.borrow_mut().background = Some(background);
    }

    /// Requested width.
    #[must_use]
    pub fn width(&self) -> LayoutSize {
        self.inner.borrow().width
    }

    /// Requested height.
    #[must_use]
    pub fn height(&self) -> LayoutSize {
        self.inner.borrow().height
    }

    /// Gravity within the parent, if any.
    #[must_use]
    pub fn layout_gravity(&self) -> Option<Gravity> {
        self.inner.borrow().layout_gravity
    }

    /// Set the layout parameters in one call, the way containers consume them.
    pub fn set_layout(&self, width: LayoutSize, height: LayoutSize, gravity: Option<Gravity>) {
        let mut data = self.inner.borrow_mut();
        data.width = width;
        data.height = height;
        if gravity.is_some() {
            data.layout_gravity = gravity;
        }
    }

    /// Set only the requested height.
    pub fn set_height(&self, height: LayoutSize) {
        self.inner.borrow_mut().height = height;
    }

    /// Gravity of the view's own content, if any.
    #[must_use]
    pub fn content_gravity(&self) -> Option<Gravity> {
        self.inner.borrow().content_gravity
    }

    /// Set the content gravity.
    pub fn set_content_gravity(&self, gravity: Gravity) {
        self.inner.borrow_mut().content_gravity = Some(gravity);
    }

    /// Current visibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.inner.borrow().visibility
    }

    /// Set the visibility.
    pub fn set_visibility(&self, visibility: Visibility) {
        self.inner.borrow_mut().visibility = visibility;
    }

    /// Whether the view accepts input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().enabled
    }

    /// Enable or disable the view.
    pub fn set_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().enabled = enabled;
    }

    /// Whether the view can take focus.
    #[must_use]
    pub fn is_focusable(&self) -> bool {
        self.inner.borrow().focusable
    }

    /// Set focusability.
    pub fn set_focusable(&self, focusable: bool) {
        self.inner.borrow_mut().focusable = focusable;
    }

    /// Whether the view is restricted to a single line.
    #[must_use]
    pub fn is_single_line(&self) -> bool {
        self.inner.borrow().single_line
    }

    /// Restrict to, or release from, a single line.
    pub fn set_single_line(&self, single_line: bool) {
        self.inner.borrow_mut().single_line = single_line;
    }

    /// Current truncation mode, if any.
    #[must_use]
    pub fn ellipsize(&self) -> Option<Ellipsize> {
        self.inner.borrow().ellipsize
    }

    /// Set the truncation mode.
    pub fn set_ellipsize(&self, ellipsize: Ellipsize) {
        self.inner.borrow_mut().ellipsize = Some(ellipsize);
    }

    /// Whether a switch view is on.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.inner.borrow().checked
    }

    /// Set the checked state and notify the checked-change handler when the
    /// state actually changes.
    pub fn set_checked(&self, checked: bool) {
        let handler = {
            let mut data = self.inner.borrow_mut();
            if data.checked == checked {
                None
            } else {
                data.checked = checked;
                data.callbacks.on_checked_change.clone()
            }
        };
        if let Some(handler) = handler {
            handler(self, checked);
        }
    }

    /// Requested keyboard class, if any.
    #[must_use]
    pub fn input_type(&self) -> Option<InputType> {
        self.inner.borrow().input_type
    }

    /// Set the keyboard class.
    pub fn set_input_type(&self, input_type: InputType) {
        self.inner.borrow_mut().input_type = Some(input_type);
    }

    /// The compound drawable in the given slot (0 = start, 1 = top, 2 = end,
    /// 3 = bottom).
    #[must_use]
    pub fn compound_drawable(&self, slot: usize) -> Option<Drawable> {
        self.inner.borrow().compound_drawables.get(slot).copied()?
    }

    /// Replace all four compound drawable slots at once.
    pub fn set_compound_drawables(&self, drawables: [Option<Drawable>; 4]) {
        self.inner.borrow_mut().compound_drawables = drawables;
    }

    /// Padding between the text and its compound drawables, if set.
    #[must_use]
    pub fn compound_drawable_padding(&self) -> Option<i32> {
        self.inner.borrow().compound_drawable_padding
    }

    /// Set the compound drawable padding.
    pub fn set_compound_drawable_padding(&self, px: i32) {
        self.inner.borrow_mut().compound_drawable_padding = Some(px);
    }

    /// Whether a switch displays its on/off text.
    #[must_use]
    pub fn shows_switch_text(&self) -> bool {
        self.inner.borrow().shows_switch_text
    }

    /// Show or hide the switch on/off text.
    pub fn set_shows_switch_text(&self, shown: bool) {
        self.inner.borrow_mut().shows_switch_text = shown;
    }

    /// The switch "on" label, if set.
    #[must_use]
    pub fn switch_text_on(&self) -> Option<String> {
        self.inner.borrow().switch_text_on.clone()
    }

    /// Set the switch "on" label.
    pub fn set_switch_text_on(&self, text: impl Into<String>) {
        self.inner.borrow_mut().switch_text_on = Some(text.into());
    }

    /// The switch "off" label, if set.
    #[must_use]
    pub fn switch_text_off(&self) -> Option<String> {
        self.inner.borrow().switch_text_off.clone()
    }

    /// Set the switch "off" label.
    pub fn set_switch_text_off(&self, text: impl Into<String>) {
        self.inner.borrow_mut().switch_text_off = Some(text.into());
    }

    /// Typeface used by the switch thumb text, if set.
    #[must_use]
    pub fn switch_typeface(&self) -> Option<Typeface> {
        self.inner.borrow().switch_typeface.clone()
    }

    /// Set the switch thumb typeface.
    pub fn set_switch_typeface(&self, typeface: Option<Typeface>) {
        self.inner.borrow_mut().switch_typeface = typeface;
    }

    /// Number of characters typed before completions show.
    #[must_use]
    pub fn completion_threshold(&self) -> i32 {
        self.inner.borrow().completion_threshold
    }

    /// Set the completion threshold.
    pub fn set_completion_threshold(&self, threshold: i32) {
        self.inner.borrow_mut().completion_threshold = threshold;
    }

    /// The registered completion suggestions.
    #[must_use]
    pub fn completions(&self) -> Vec<String> {
        self.inner.borrow().completions.clone()
    }

    /// Replace the completion suggestions.
    pub fn set_completions(&self, completions: Vec<String>) {
        self.inner.borrow_mut().completions = completions;
    }

    /// Whether the completion list opens on touch regardless of input length.
    #[must_use]
    pub fn completes_on_touch(&self) -> bool {
        self.inner.borrow().completes_on_touch
    }

    /// Open the completion list on touch.
    pub fn set_completes_on_touch(&self, on_touch: bool) {
        self.inner.borrow_mut().completes_on_touch = on_touch;
    }

    /// Whether an input layout shows the password visibility toggle.
    #[must_use]
    pub fn shows_password_toggle(&self) -> bool {
        self.inner.borrow().password_toggle
    }

    /// Show or hide the password visibility toggle.
    pub fn set_shows_password_toggle(&self, shown: bool) {
        self.inner.borrow_mut().password_toggle = shown;
    }

    /// Append a child view, recording this view as its parent.
    pub fn add_child(&self, child: &Self) {
        child.inner.borrow_mut().parent = Some(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// The child at `index`, if present.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Self> {
        self.inner.borrow().children.get(index).cloned()
    }

    /// Whether this view has been attached to a parent.
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.inner
            .borrow()
            .parent
            .as_ref()
            .is_some_and(|parent| parent.upgrade().is_some())
    }

    /// Attach or clear the click handler.
    pub fn set_on_click(&self, handler: Option<ClickHandler>) {
        self.inner.borrow_mut().callbacks.on_click = handler;
    }

    /// Whether a click handler is attached.
    #[must_use]
    pub fn has_click_handler(&self) -> bool {
        self.inner.borrow().callbacks.on_click.is_some()
    }

    /// Simulate a click. Disabled views swallow the event, as the native
    /// widget would.
    pub fn click(&self) {
        let handler = {
            let data = self.inner.borrow();
            if !data.enabled {
                return;
            }
            data.callbacks.on_click.clone()
        };
        if let Some(handler) = handler {
            handler(self);
        }
    }

    /// Attach or clear the checked-change handler.
    pub fn set_on_checked_change(&self, handler: Option<CheckedChangeHandler>) {
        self.inner.borrow_mut().callbacks.on_checked_change = handler;
    }

    /// Register a text watcher, called after every text change.
    pub fn add_text_watcher(&self, watcher: TextWatcher) {
        self.inner.borrow_mut().callbacks.text_watchers.push(watcher);
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("View")
            .field("kind", &data.kind)
            .field("text", &data.text)
            .field("children", &data.children.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_state() {
        let view = View::new(ViewKind::Text);
        let other = view.clone();
        view.set_text("hello");
        assert_eq!(other.text(), "hello");
        assert!(view.same_view(&other));
    }

    #[test]
    fn only_groups_hold_children() {
        assert!(View::new(ViewKind::Group).is_group());
        assert!(View::new(ViewKind::InputLayout).is_group());
        assert!(!View::new(ViewKind::Button).is_group());
    }

    #[test]
    fn add_child_sets_parent_and_order() {
        let group = View::new(ViewKind::Group);
        let a = View::new(ViewKind::Text);
        let b = View::new(ViewKind::Plain);
        group.add_child(&a);
        group.add_child(&b);
        assert_eq!(group.child_count(), 2);
        assert!(group.child(0).unwrap().same_view(&a));
        assert!(group.child(1).unwrap().same_view(&b));
        assert!(a.has_parent());
    }

    #[test]
    fn click_fires_handler_when_enabled() {
        let view = View::new(ViewKind::Button);
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        view.set_on_click(Some(Rc::new(move |_| counter.set(counter.get() + 1))));

        view.click();
        assert_eq!(clicks.get(), 1);

        view.set_enabled(false);
        view.click();
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn checked_change_fires_only_on_transitions() {
        let view = View::new(ViewKind::Switch);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        view.set_on_checked_change(Some(Rc::new(move |_, checked| {
            log.borrow_mut().push(checked);
        })));

        view.set_checked(true);
        view.set_checked(true);
        view.set_checked(false);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn text_watchers_observe_every_change() {
        let view = View::new(ViewKind::EditText);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        view.add_text_watcher(Rc::new(move |text| log.borrow_mut().push(text.to_string())));

        view.set_text("a");
        view.set_text("ab");
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn layout_keeps_gravity_when_not_given() {
        let view = View::new(ViewKind::Text);
        view.set_layout(
            LayoutSize::MatchParent,
            LayoutSize::WrapContent,
            Some(Gravity::CenterVertical),
        );
        view.set_layout(LayoutSize::MatchParent, LayoutSize::Px(10), None);
        assert_eq!(view.layout_gravity(), Some(Gravity::CenterVertical));
        assert_eq!(view.height(), LayoutSize::Px(10));
    }
}
