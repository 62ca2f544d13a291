use web_sys::js_sys;
use yew::prelude::*;

use crate::components::decor::{DataBar, FloatingCircle};
use crate::components::icons::Icon;
use crate::components::mini_chart::MiniChart;
use crate::components::ring_chart::RingChart;
use crate::components::stat_card::StatCard;
use crate::config;

#[function_component(Landing)]
pub fn landing() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="landing-page">
            <LandingStyles />

            <FloatingCircle size="300px" top="10%" left="5%" delay="0s" color="#7c3aed" />
            <FloatingCircle size="200px" top="60%" left="80%" delay="2s" color="#9333ea" />
            <FloatingCircle size="150px" top="30%" left="85%" delay="4s" color="#4f46e5" />
            <FloatingCircle size="250px" top="70%" left="10%" delay="1s" color="#7c3aed" />

            <main class="page-main">
                <header class="page-header fade-in">
                    <div class="brand">
                        <div class="brand-mark">
                            <Icon name="bar-chart" size={24} />
                        </div>
                        <span class="brand-name">{ config::BRAND_NAME }</span>
                    </div>
                    <a
                        href={config::get_repo_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="github-button"
                    >
                        <Icon name="github" size={20} />
                        <span class="github-button-label">{"GitHub"}</span>
                    </a>
                </header>

                <section class="hero">
                    <div class="hero-badge slide-up" style="animation-delay: 200ms;">
                        <Icon name="sparkles" size={16} />
                        <span>{"Data-Driven Insights"}</span>
                    </div>

                    <h1 class="hero-title slide-up" style="animation-delay: 400ms;">
                        <span>{"Transform Data Into"}</span>
                        <br />
                        <span class="gradient-text">{"Intelligence"}</span>
                    </h1>

                    <p class="hero-subtitle slide-up" style="animation-delay: 600ms;">
                        {"Advanced analytics platform for modern businesses. Unlock the power \
                          of your data with AI-driven insights and real-time visualization."}
                    </p>

                    <div class="coming-soon slide-up" style="animation-delay: 800ms;">
                        <div class="coming-soon-halo"></div>
                        <div class="coming-soon-badge">
                            <span class="gradient-text">{"Coming Soon"}</span>
                        </div>
                    </div>

                    <div class="stats-grid">
                        <StatCard icon="database" value={50} suffix="M+" label="Data Points" delay_ms={1000} />
                        <StatCard icon="trending-up" value={99} suffix="%" label="Accuracy" delay_ms={1200} />
                        <StatCard icon="activity" value={10} suffix="ms" label="Response" delay_ms={1400} />
                        <StatCard icon="pie-chart" value={500} suffix="+" label="Integrations" delay_ms={1600} />
                    </div>
                </section>

                <section class="viz-section">
                    <div class="glass-card chart-card slide-up" style="animation-delay: 1800ms;">
                        <div class="chart-card-header">
                            <div class="chart-card-title">
                                <div class="chart-card-icon">
                                    <Icon name="trending-up" size={20} />
                                </div>
                                <div>
                                    <h3>{"Real-time Analytics"}</h3>
                                    <p>{"Live data processing"}</p>
                                </div>
                            </div>
                            <div class="trend-chip">
                                <Icon name="arrow-up-right" size={18} />
                                <span>{"+24.5%"}</span>
                            </div>
                        </div>
                        <MiniChart />
                        <div class="time-axis">
                            <span>{"00:00"}</span>
                            <span>{"06:00"}</span>
                            <span>{"12:00"}</span>
                            <span>{"18:00"}</span>
                            <span>{"24:00"}</span>
                        </div>
                    </div>

                    <div class="viz-side">
                        <div class="glass-card ring-card slide-up" style="animation-delay: 1900ms;">
                            <RingChart />
                        </div>

                        <div class="glass-card bars-card slide-up" style="animation-delay: 2000ms;">
                            <h4>{"Data Distribution"}</h4>
                            <div class="bars-row">
                                <DataBar height={40} delay="2.2s" color="#a78bfa" />
                                <DataBar height={70} delay="2.3s" color="#8b5cf6" />
                                <DataBar height={55} delay="2.4s" color="#a78bfa" />
                                <DataBar height={90} delay="2.5s" color="#7c3aed" />
                                <DataBar height={65} delay="2.6s" color="#8b5cf6" />
                                <DataBar height={80} delay="2.7s" color="#a78bfa" />
                                <DataBar height={45} delay="2.8s" color="#8b5cf6" />
                            </div>
                        </div>
                    </div>
                </section>

                <section class="features-grid">
                    {
                        for [
                            ("database", "Big Data Processing", "Handle petabytes of data effortlessly"),
                            ("activity", "Live Monitoring", "Real-time dashboard updates"),
                            ("trending-up", "Predictive Analytics", "AI-powered forecasting"),
                            ("pie-chart", "Custom Reports", "Tailored to your needs"),
                        ]
                        .iter()
                        .enumerate()
                        .map(|(i, &(icon, title, desc))| html! {
                            <div
                                class="glass-card feature-card slide-up"
                                style={format!("animation-delay: {}ms;", 2200 + i * 100)}
                            >
                                <Icon name={icon} size={24} />
                                <h4>{ title }</h4>
                                <p>{ desc }</p>
                            </div>
                        })
                    }
                </section>

                <footer class="page-footer fade-in" style="animation-delay: 2600ms;">
                    <div class="footer-pill">
                        <span>{ format!("© {} {}. All rights reserved.", year, config::BRAND_NAME) }</span>
                        <span class="footer-divider">{"|"}</span>
                        <a
                            href={config::get_repo_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="footer-link"
                        >
                            <Icon name="github" size={14} />
                            {"GitHub"}
                        </a>
                    </div>
                </footer>
            </main>
        </div>
    }
}

#[function_component(LandingStyles)]
fn landing_styles() -> Html {
    html! {
        <style>
            {r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    background: #0f172a;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                        Helvetica, Arial, sans-serif;
                }

                .site-root {
                    min-height: 100vh;
                    position: relative;
                    overflow: hidden;
                }

                .data-grid {
                    background-image:
                        linear-gradient(rgba(139, 92, 246, 0.05) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(139, 92, 246, 0.05) 1px, transparent 1px);
                    background-size: 40px 40px;
                }

                .cursor-glow {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    transition: background 1s ease-out;
                }

                .floating-circle {
                    position: absolute;
                    border-radius: 50%;
                    opacity: 0.2;
                    filter: blur(24px);
                    animation: float 8s ease-in-out infinite;
                }

                .page-main {
                    position: relative;
                    z-index: 1;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem 1rem 4rem;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                }

                .glass-card {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    transition: background 0.3s, transform 0.3s;
                }

                .glass-card:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: scale(1.05);
                }

                /* Header */
                .page-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 4rem;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .brand-mark {
                    width: 40px;
                    height: 40px;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #8b5cf6, #9333ea);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 0 24px rgba(139, 92, 246, 0.5);
                }

                .brand-name {
                    font-size: 1.25rem;
                    font-weight: bold;
                }

                .github-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #cbd5e1;
                    text-decoration: none;
                    transition: background 0.3s, transform 0.3s, color 0.3s;
                }

                .github-button:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: scale(1.05);
                    color: #fff;
                }

                /* Hero */
                .hero {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #cbd5e1;
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }

                .hero-badge svg {
                    color: #a78bfa;
                }

                .hero-title {
                    font-size: clamp(2.5rem, 7vw, 4.5rem);
                    font-weight: bold;
                    margin: 0 0 1.5rem;
                    line-height: 1.1;
                }

                .gradient-text {
                    background: linear-gradient(45deg, #a78bfa, #8b5cf6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.125rem;
                    color: #94a3b8;
                    max-width: 42rem;
                    margin: 0 0 3rem;
                }

                .coming-soon {
                    position: relative;
                    margin-bottom: 4rem;
                }

                .coming-soon-halo {
                    position: absolute;
                    inset: 0;
                    background: #8b5cf6;
                    filter: blur(40px);
                    opacity: 0.2;
                    border-radius: 999px;
                }

                .coming-soon-badge {
                    position: relative;
                    padding: 1rem 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(139, 92, 246, 0.3);
                    box-shadow: 0 0 24px rgba(139, 92, 246, 0.4);
                    font-size: 1.75rem;
                    font-weight: bold;
                }

                /* Stats */
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                    width: 100%;
                    max-width: 56rem;
                }

                @media (min-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }

                .stat-card {
                    padding: 1.5rem;
                }

                .stat-card-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }

                .stat-icon {
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: rgba(139, 92, 246, 0.2);
                    color: #a78bfa;
                    display: flex;
                }

                .stat-label {
                    font-size: 0.875rem;
                    color: #94a3b8;
                }

                .stat-value-row {
                    display: flex;
                    align-items: baseline;
                    gap: 0.25rem;
                }

                .stat-value {
                    font-size: 2rem;
                    font-weight: bold;
                }

                .stat-suffix {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #a78bfa;
                }

                /* Visualization cards */
                .viz-section {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }

                @media (min-width: 768px) {
                    .viz-section {
                        grid-template-columns: 2fr 1fr;
                    }
                }

                .chart-card {
                    padding: 1.5rem;
                }

                .chart-card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }

                .chart-card-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .chart-card-icon {
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: rgba(139, 92, 246, 0.2);
                    color: #a78bfa;
                    display: flex;
                }

                .chart-card-title h3 {
                    margin: 0;
                    font-size: 1.125rem;
                }

                .chart-card-title p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }

                .trend-chip {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #34d399;
                    font-weight: 600;
                }

                .mini-chart {
                    width: 100%;
                    height: 6rem;
                }

                .time-axis {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    color: #64748b;
                }

                .viz-side {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .ring-card {
                    padding: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .ring-chart {
                    position: relative;
                    width: 8rem;
                    height: 8rem;
                }

                .ring-chart-center {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #a78bfa;
                }

                .ring-arc {
                    stroke-dashoffset: 251;
                    animation: ring-reveal 1.5s ease-out forwards;
                }

                .bars-card {
                    padding: 1.5rem;
                }

                .bars-card h4 {
                    margin: 0 0 1rem;
                    font-size: 0.875rem;
                    color: #94a3b8;
                    font-weight: normal;
                }

                .bars-row {
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    height: 5rem;
                    gap: 0.5rem;
                }

                .data-bar {
                    width: 0.875rem;
                    border-radius: 999px;
                    transform-origin: bottom;
                }

                /* Features */
                .features-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    margin-bottom: 4rem;
                }

                @media (min-width: 640px) {
                    .features-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .features-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }

                .feature-card {
                    padding: 1.25rem;
                    color: #a78bfa;
                }

                .feature-card h4 {
                    margin: 0.75rem 0 0.25rem;
                    color: #fff;
                }

                .feature-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }

                /* Footer */
                .page-footer {
                    text-align: center;
                }

                .footer-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                    color: #94a3b8;
                }

                .footer-divider {
                    color: #475569;
                }

                .footer-link {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    color: #a78bfa;
                    text-decoration: none;
                    transition: color 0.3s;
                }

                .footer-link:hover {
                    color: #c4b5fd;
                }

                /* Keyframes */
                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes slide-up {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }

                @keyframes bar-grow {
                    from { transform: scaleY(0); }
                    to { transform: scaleY(1); }
                }

                @keyframes dash {
                    to { stroke-dashoffset: 0; }
                }

                @keyframes ring-reveal {
                    from { stroke-dashoffset: 251; }
                    to { stroke-dashoffset: var(--ring-offset); }
                }

                .fade-in {
                    opacity: 0;
                    animation: fade-in 1s ease-out forwards;
                }

                .slide-up {
                    opacity: 0;
                    animation: slide-up 0.6s ease-out forwards;
                }

                .bar-grow {
                    animation: bar-grow 0.8s ease-out both;
                }

                .chart-line {
                    stroke-dasharray: 1000;
                    stroke-dashoffset: 1000;
                    animation: dash 2s ease-out forwards;
                }
            "#}
        </style>
    }
}
