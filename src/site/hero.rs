//! src/site/hero.rs
use super::carousel::{RotatingText, DEFAULT_INTERVAL};
use super::form::FormSnapshot;
use super::signup_fragment;

/// Hero: headline, the rotating display seeded at its active frame, and the
/// primary signup form.
pub fn render_hero(form: &FormSnapshot, rotation: &RotatingText) -> String {
    let frames: String = rotation
        .texts()
        .iter()
        .map(|text| {
            let hidden = if text == rotation.current() {
                ""
            } else {
                " hidden"
            };
            format!(
                r#"<span class="carousel-frame"{hidden}>{}</span>"#,
                htmlescape::encode_minimal(text)
            )
        })
        .collect();

    let signup = signup_fragment(
        form,
        "hero-form",
        "🎉 Thanks for joining! We'll be in touch soon.",
    );

    format!(
        r#"<section class="hero" aria-labelledby="hero-heading">
    <h1 id="hero-heading">MyCandid: Authentic Social Media Platform</h1>
    <div class="text-carousel" data-interval="{interval}" aria-live="polite" aria-atomic="true">{frames}</div>
    <p class="hero-copy">The social media platform where authenticity isn't optional;
        it's everything. Share only what you capture in the moment with no fake
        content, and no curated feeds.</p>
    {signup}
    <p class="hero-note">Be among the first to reclaim social media and experience
        authentic connections.</p>
</section>"#,
        interval = DEFAULT_INTERVAL.as_millis(),
    )
}
