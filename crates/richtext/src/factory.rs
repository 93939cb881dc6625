//! The rich text factory: markup in, styled text out.

use crate::color::{ColorResolver, DefaultColorResolver};
use crate::markup::RenderedText;
use crate::parser;
use crate::style::{DefaultStyleFactory, Style, StyleFactory};

/// Renders rich text markup using a color resolver and a style factory.
///
/// The factory holds no per-call state, so one instance can be shared
/// across threads (it is `Sync` whenever its collaborators are).
///
/// # Examples
///
/// ```
/// use richtext::{Color, RichTextFactory, Style};
///
/// let factory = RichTextFactory::with_color_resolver(|value: &str| match value {
///     "warning" => Ok(Color::rgb(255, 200, 0)),
///     other => Color::parse(other),
/// });
///
/// let rendered = factory.render("<color=warning>careful</color>");
/// assert_eq!(rendered.text(), "careful");
/// assert_eq!(rendered.spans()[0].style, Style::colored(Color::rgb(255, 200, 0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RichTextFactory<C = DefaultColorResolver, F = DefaultStyleFactory> {
    color_resolver: C,
    style_factory: F,
}

impl<C, F> RichTextFactory<C, F>
where
    C: ColorResolver,
    F: StyleFactory,
{
    pub fn new(color_resolver: C, style_factory: F) -> Self {
        Self {
            color_resolver,
            style_factory,
        }
    }

    /// Strip the markup from `input` and compute its style spans.
    ///
    /// Returns the input itself, borrowed, when there is nothing to strip.
    pub fn render<'a>(&self, input: &'a str) -> RenderedText<'a, F::Style> {
        parser::parse(input, &self.color_resolver, &self.style_factory)
    }

    pub fn color_resolver(&self) -> &C {
        &self.color_resolver
    }

    pub fn style_factory(&self) -> &F {
        &self.style_factory
    }
}

impl<C: ColorResolver> RichTextFactory<C, DefaultStyleFactory> {
    /// Use a custom color resolver with the default [`Style`] output.
    pub fn with_color_resolver(color_resolver: C) -> Self {
        Self::new(color_resolver, DefaultStyleFactory)
    }
}

/// Render markup with the default resolver and style factory.
///
/// # Examples
///
/// ```
/// use richtext::{Style, render_rich_text};
///
/// let rendered = render_rich_text("<b>a<i>b</i>c</b>");
/// assert_eq!(rendered.text(), "abc");
/// assert_eq!(rendered.spans()[0].style, Style::bold());
/// assert_eq!(rendered.spans()[1].style, Style::bold_italic());
/// ```
pub fn render_rich_text(input: &str) -> RenderedText<'_, Style> {
    RichTextFactory::<DefaultColorResolver, DefaultStyleFactory>::default().render(input)
}
