use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::chapter::ChapterSection;
use crate::components::feature_grid::FeatureGrid;
use crate::components::footer::Footer;
use crate::components::glow::GlowOverlay;
use crate::components::hero::Hero;
use crate::content::CHAPTERS;
use crate::effects::pointer::glow_placement;
use crate::hooks::use_viewport_tracking;
use crate::state::{ChapterId, PageState, ViewportAction};

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_reducer(PageState::default);
    use_viewport_tracking(page.dispatcher());

    let on_chapter_enter = {
        let dispatcher = page.dispatcher();
        Callback::from(move |id: ChapterId| dispatcher.dispatch(ViewportAction::ChapterEntered(id)))
    };
    let on_chapter_leave = {
        let dispatcher = page.dispatcher();
        Callback::from(move |id: ChapterId| dispatcher.dispatch(ViewportAction::ChapterLeft(id)))
    };

    html! {
        <div class="landing-page">
            <GlowOverlay placement={glow_placement(page.pointer)} />
            <Hero scroll={page.scroll} />
            <FeatureGrid />
            { for CHAPTERS.iter().map(|chapter| html! {
                <ChapterSection
                    key={chapter.title}
                    chapter={chapter}
                    scroll={page.scroll}
                    on_enter={on_chapter_enter.clone()}
                    on_leave={on_chapter_leave.clone()}
                />
            }) }
            <CallToAction />
            <Footer />
            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        background: #000;
        color: #fff;
        overflow-x: hidden;
        font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    }

    @keyframes fade-in-up {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes bounce {
        0%, 100% { transform: translate(-50%, -25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
        50% { transform: translate(-50%, 0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
    }
    .fade-in-up {
        display: inline-block;
        animation: fade-in-up 0.8s ease-out both;
    }

    .cursor-glow {
        position: fixed;
        width: 384px;
        height: 384px;
        pointer-events: none;
        z-index: 50;
        opacity: 0.2;
        filter: blur(64px);
        transition: all 0.3s;
        background: radial-gradient(circle, rgba(139, 92, 246, 0.3) 0%, transparent 70%);
    }

    .gradient-heading {
        font-size: 3.75rem;
        font-weight: 700;
        text-align: center;
        background: linear-gradient(to right, #e2e8f0, #94a3b8);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }

    /* hero */
    .hero {
        position: relative;
        height: 100vh;
        overflow: hidden;
    }
    .hero-layers, .hero-background, .hero-shade, .hero-noise {
        position: absolute;
        inset: 0;
    }
    .hero-background {
        background-size: cover;
        background-position: center;
        transition: transform 75ms;
    }
    .hero-shade {
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.5), #000);
    }
    .hero-noise {
        opacity: 0.1;
        background-repeat: repeat;
        background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noise'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' /%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noise)' /%3E%3C/svg%3E");
    }
    .hero-inner {
        position: relative;
        z-index: 10;
        height: 100%;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 0 1rem;
    }
    .hero-content {
        transition: all 0.7s;
        text-align: center;
    }
    .hero-title {
        font-size: 8rem;
        font-weight: 700;
        letter-spacing: 0.05em;
        margin-bottom: 1.5rem;
        line-height: 1;
    }
    .hero-title-name {
        background: linear-gradient(to right, #e2e8f0, #f1f5f9, #cbd5e1);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-title-small {
        font-size: 4.5rem;
    }
    .hero-tagline {
        font-size: 1.5rem;
        color: #cbd5e1;
        margin-bottom: 2rem;
        max-width: 48rem;
    }
    .hero-tagline-sub {
        font-size: 1.125rem;
        color: #94a3b8;
    }
    .hero-actions {
        display: flex;
        gap: 1.5rem;
        justify-content: center;
    }
    .scroll-hint {
        position: absolute;
        bottom: 3rem;
        left: 50%;
        color: #94a3b8;
        animation: bounce 1s infinite;
    }

    /* buttons */
    .cta-button, .chapter-button {
        position: relative;
        overflow: hidden;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        border: 1px solid #475569;
        background: rgba(30, 41, 59, 0.5);
        backdrop-filter: blur(4px);
        color: inherit;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
        transition: all 0.3s;
    }
    .cta-button:hover {
        border-color: #94a3b8;
        box-shadow: 0 25px 50px -12px rgba(100, 116, 139, 0.5);
    }
    .cta-fill {
        position: absolute;
        inset: 0;
        opacity: 0;
        background: linear-gradient(to right, #475569, #1e293b);
        transition: opacity 0.3s;
    }
    .cta-button:hover .cta-fill, .chapter-button:hover .cta-fill {
        opacity: 1;
    }
    .cta-label {
        position: relative;
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .cta-large {
        padding: 1.5rem 3rem;
        border-radius: 0.75rem;
        font-size: 1.25rem;
        font-weight: 700;
    }
    .cta-large:hover, .chapter-button:hover {
        transform: scale(1.05);
    }
    .ghost-button {
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        border: 1px solid #475569;
        background: transparent;
        color: inherit;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
        transition: all 0.3s;
    }
    .ghost-button:hover {
        background: rgba(30, 41, 59, 0.3);
        border-color: #94a3b8;
    }

    /* features */
    .features {
        position: relative;
        padding: 8rem 1rem;
        background: linear-gradient(to bottom, #000, #020617, #000);
    }
    .features-inner {
        max-width: 80rem;
        margin: 0 auto;
    }
    .features .gradient-heading {
        margin-bottom: 5rem;
    }
    .feature-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .feature-card {
        position: relative;
        overflow: hidden;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid #334155;
        background: linear-gradient(to bottom right, rgba(15, 23, 42, 0.5), rgba(30, 41, 59, 0.3));
        backdrop-filter: blur(4px);
        animation: fade-in-up 0.6s ease-out both;
        transition: all 0.5s;
    }
    .feature-card:hover {
        transform: scale(1.05);
        border-color: #64748b;
        box-shadow: 0 25px 50px -12px rgba(51, 65, 85, 0.5);
    }
    .feature-card-sheen {
        position: absolute;
        inset: 0;
        opacity: 0;
        background: linear-gradient(to bottom right, rgba(71, 85, 105, 0.1), transparent);
        transition: opacity 0.5s;
    }
    .feature-card:hover .feature-card-sheen {
        opacity: 1;
    }
    .feature-card-body {
        position: relative;
    }
    .feature-icon {
        font-size: 3rem;
        margin-bottom: 1rem;
        transition: transform 0.3s;
    }
    .feature-card:hover .feature-icon {
        transform: scale(1.1);
    }
    .feature-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
        color: #f1f5f9;
    }
    .feature-card p {
        color: #94a3b8;
        line-height: 1.6;
    }

    /* chapters */
    .chapter {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        overflow: hidden;
    }
    .chapter-background {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
    }
    .chapter-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, #000, rgba(0, 0, 0, 0.8), transparent);
    }
    .image-left .chapter-shade {
        background: linear-gradient(to left, #000, rgba(0, 0, 0, 0.8), transparent);
    }
    .chapter-inner {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        margin: 0 auto;
        padding: 8rem 1rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .image-left .chapter-image {
        order: -1;
    }
    .image-left .chapter-text {
        text-align: right;
    }
    .chapter-text {
        transition: all 0.7s;
    }
    .chapter-badge {
        display: inline-block;
        padding: 0.5rem 1rem;
        margin-bottom: 1.5rem;
        border-radius: 9999px;
        border: 1px solid #475569;
        background: rgba(30, 41, 59, 0.5);
        font-size: 0.875rem;
        font-weight: 600;
        color: #cbd5e1;
    }
    .chapter-title {
        font-size: 4.5rem;
        font-weight: 700;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .chapter-title-main {
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .chapter-title-sub {
        color: #cbd5e1;
    }
    .chapter-body p {
        font-size: 1.125rem;
        color: #cbd5e1;
        line-height: 1.6;
        margin-bottom: 1rem;
    }
    .chapter-body .chapter-themes {
        color: #94a3b8;
    }
    .chapter-themes-label {
        font-weight: 600;
    }
    .chapter-button {
        margin-top: 2rem;
    }
    .chevron-right {
        transform: rotate(-90deg);
    }
    .chapter-image {
        position: relative;
    }
    .chapter-image-glow {
        position: absolute;
        inset: 0;
        filter: blur(64px);
        transition: transform 0.7s;
    }
    .chapter-image:hover .chapter-image-glow {
        transform: scale(1.1);
    }
    .chapter-image-frame {
        position: relative;
        aspect-ratio: 16 / 9;
        border-radius: 1rem;
        overflow: hidden;
        border: 2px solid #334155;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        transition: all 0.5s;
    }
    .chapter-image-frame img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s;
    }
    .chapter-image:hover img {
        transform: scale(1.1);
    }
    .chapter-image-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent, transparent);
    }

    .chapter-amber .chapter-title-main {
        background-image: linear-gradient(to right, #fde68a, #f1f5f9, #fcd34d);
    }
    .chapter-amber .chapter-themes-label { color: #fbbf24; }
    .chapter-amber .chapter-button {
        border-color: rgba(180, 83, 9, 0.5);
        background: linear-gradient(to right, rgba(120, 53, 15, 0.5), rgba(30, 41, 59, 0.5));
        color: #fef3c7;
    }
    .chapter-amber .chapter-button .cta-fill {
        background: linear-gradient(to right, #b45309, #78350f);
    }
    .chapter-amber .chapter-image-glow {
        background: linear-gradient(to bottom right, rgba(217, 119, 6, 0.3), transparent);
    }
    .chapter-amber .chapter-image:hover .chapter-image-frame {
        border-color: rgba(217, 119, 6, 0.5);
    }

    .chapter-teal .chapter-title-main {
        background-image: linear-gradient(to right, #5eead4, #f1f5f9, #67e8f9);
    }
    .chapter-teal .chapter-themes-label { color: #2dd4bf; }
    .chapter-teal .chapter-button {
        border-color: rgba(15, 118, 110, 0.5);
        background: linear-gradient(to right, rgba(19, 78, 74, 0.5), rgba(30, 41, 59, 0.5));
        color: #ccfbf1;
    }
    .chapter-teal .chapter-button .cta-fill {
        background: linear-gradient(to right, #0f766e, #134e4a);
    }
    .chapter-teal .chapter-image-glow {
        background: linear-gradient(to bottom right, rgba(13, 148, 136, 0.3), transparent);
    }
    .chapter-teal .chapter-image:hover .chapter-image-frame {
        border-color: rgba(13, 148, 136, 0.5);
    }

    /* closing */
    .final-cta {
        position: relative;
        padding: 8rem 1rem;
        background: linear-gradient(to bottom, #000, #020617, #0f172a);
    }
    .final-cta-content {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .final-cta-content .gradient-heading {
        margin-bottom: 2rem;
    }
    .final-cta-content p {
        font-size: 1.25rem;
        color: #94a3b8;
        margin-bottom: 3rem;
    }
    .site-footer {
        padding: 3rem 1rem;
        background: #020617;
        border-top: 1px solid #1e293b;
        text-align: center;
        color: #64748b;
    }
    .footer-tagline {
        font-size: 0.875rem;
    }

    @media (max-width: 768px) {
        .hero-title { font-size: 4.5rem; }
        .hero-title-small { font-size: 3.75rem; }
        .gradient-heading { font-size: 3rem; }
        .feature-grid, .chapter-inner { grid-template-columns: 1fr; }
        .chapter-title { font-size: 3.75rem; }
        .image-left .chapter-image { order: 2; }
    }
"#;
