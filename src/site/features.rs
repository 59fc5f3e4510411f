//! src/site/features.rs
struct Feature {
    title: &'static str,
    copy: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Capture-Only Social Media",
        copy: "Share only what you capture in the moment. No uploads from your \
               camera roll means every post on our platform is authentic and real.",
    },
    Feature {
        title: "100% Authentic Content",
        copy: "No AI-generated images, no stock photos, no stolen content. Just \
               real moments from real people on the most authentic social network.",
    },
    Feature {
        title: "Real Human Connections",
        copy: "Built for genuine social interactions, not vanity metrics. Connect \
               with real people sharing real moments on social media.",
    },
    Feature {
        title: "Privacy-First Social Network",
        copy: "Your moments belong to you. No data mining, no creepy algorithms \
               tracking your behavior, just pure social connection.",
    },
];

/// The "why we are different" section, a static grid of the product pillars.
pub fn render_features() -> String {
    let cards: String = FEATURES
        .iter()
        .map(|feature| {
            format!(
                r#"<article class="feature-card">
        <h3>{title}</h3>
        <p>{copy}</p>
    </article>"#,
                title = feature.title,
                copy = feature.copy,
            )
        })
        .collect();

    format!(
        r#"<section class="features" aria-labelledby="features-heading">
    <h2 id="features-heading">Why MyCandid is Different from Other Social Media Platforms</h2>
    <p class="features-intro">We're building a platform that puts humans first.</p>
    <div class="feature-grid">{cards}</div>
    <div class="features-manifesto">
        <h3>Take Back Control of Your Social Media Experience</h3>
        <p>Social media was supposed to connect us, but somewhere along the way it
            became a highlight reel of manufactured perfection. MyCandid returns to
            the original promise: a place to share your life as it actually happens.</p>
        <p>When everyone can only post what they capture, everyone is on the same
            footing. No filters to hide behind, no archives to curate from, just
            the world as you see it right now.</p>
    </div>
</section>"#
    )
}
