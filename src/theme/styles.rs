//! Global CSS styles for Shoreline.
//!
//! Light palette by default; `html.dark` switches every custom property.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SKY */
  --sky-top: #bfdbfe;
  --sky-bottom: #eff6ff;

  /* TEXT */
  --text-primary: #0f172a;
  --text-secondary: rgba(15, 23, 42, 0.75);
  --accent: #2563eb;

  /* SURFACES */
  --card-bg: rgba(255, 255, 255, 0.55);
  --card-border: rgba(255, 255, 255, 0.7);
  --button-border: rgba(15, 23, 42, 0.2);
  --button-bg: rgba(255, 255, 255, 0.4);
  --leaf: #16a34a;
  --bird: #1e293b;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-theme: 600ms ease;
}

html.dark {
  --sky-top: #020617;
  --sky-bottom: #1e293b;

  --text-primary: #f1f5f9;
  --text-secondary: rgba(241, 245, 249, 0.75);
  --accent: #93c5fd;

  --card-bg: rgba(15, 23, 42, 0.55);
  --card-border: rgba(148, 163, 184, 0.25);
  --button-border: rgba(241, 245, 249, 0.25);
  --button-bg: rgba(15, 23, 42, 0.4);
  --leaf: #4ade80;
  --bird: #e2e8f0;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  overflow: hidden;
  min-height: 100vh;
}

/* === Layout === */
.app-container {
  position: relative;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
}

.background-gradient {
  position: absolute;
  inset: 0;
  background: linear-gradient(180deg, var(--sky-top) 0%, var(--sky-bottom) 100%);
  transition: background var(--transition-theme);
  z-index: 0;
}

.animation-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.birds-layer { z-index: 1; }
.clouds-layer { z-index: 2; }
.falling-layer { z-index: 3; }

/* === Birds === */
.bird {
  position: absolute;
  left: -4rem;
  color: var(--bird);
  animation-name: fly-across;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

.bird-img, .bird-img svg {
  display: block;
  width: 2rem;
  height: 2rem;
}

.bird-wings {
  transform-origin: 50% 60%;
  animation: flap 0.6s ease-in-out infinite alternate;
}

@keyframes fly-across {
  from { left: -4rem; }
  to { left: calc(100vw + 4rem); }
}

@keyframes flap {
  from { transform: scaleY(1); }
  to { transform: scaleY(0.4); }
}

/* === Clouds === */
.cloud-small, .cloud-large {
  position: absolute;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
  animation-direction: alternate;
}

.cloud-small {
  opacity: 0.6;
  animation-name: drift-short;
  animation-duration: 18s;
}

.cloud-large {
  opacity: 0.7;
  animation-name: drift-long;
  animation-duration: 28s;
}

.cloud-img svg { display: block; }
.cloud-img-small svg { width: 3rem; height: 2rem; }
.cloud-img-large svg { width: 5rem; height: 3rem; }

@keyframes drift-short {
  from { transform: translateX(0); }
  to { transform: translateX(40vw); }
}

@keyframes drift-long {
  from { transform: translateX(0); }
  to { transform: translateX(55vw); }
}

/* === Falling Elements === */
.falling-element {
  position: absolute;
  top: -2rem;
  animation-name: fall;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

.snowflake, .snowflake svg {
  display: block;
  width: 1rem;
  height: 1rem;
  opacity: 0.8;
}

.leaf { color: var(--leaf); }

@keyframes fall {
  0% { transform: translateY(0) rotate(0deg); opacity: 0; }
  10% { opacity: 1; }
  100% { transform: translateY(105vh) rotate(360deg); opacity: 0.2; }
}

/* === Sea Waves === */
.sea-waves {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  height: 35vh;
  z-index: 4;
  pointer-events: none;
}

.wave {
  position: absolute;
  bottom: 0;
  left: -5%;
  width: 110%;
  height: 100%;
  animation: bob ease-in-out infinite alternate;
}

.wave-1 { animation-duration: 9s; }
.wave-2 { animation-duration: 7.5s; animation-delay: -1s; }
.wave-3 { animation-duration: 6s; animation-delay: -2s; }
.wave-4 { animation-duration: 5s; animation-delay: -3s; }
.wave-5 { animation-duration: 4s; animation-delay: -1.5s; }

@keyframes bob {
  from { transform: translateX(-2%) translateY(0); }
  to { transform: translateX(2%) translateY(6px); }
}

/* === Navigation === */
.navigation {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.25rem 2rem;
  z-index: 10;
}

.nav-left, .nav-right {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.social-icon {
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  border: 1px solid var(--button-border);
  background: var(--button-bg);
}

.btn-outline {
  font-family: var(--font-sans);
  font-size: 0.875rem;
  color: var(--text-primary);
  background: var(--button-bg);
  border: 1px solid var(--button-border);
  border-radius: 0.5rem;
  padding: 0.5rem 1rem;
  cursor: pointer;
  backdrop-filter: blur(6px);
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.btn-outline:hover {
  transform: translateY(-1px);
  border-color: var(--accent);
}

.btn-icon {
  width: 2.25rem;
  height: 2.25rem;
  padding: 0;
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.icon-size {
  font-size: 1.1rem;
  line-height: 1;
}

/* === Side Navigation === */
.side-navigation {
  position: absolute;
  left: 1.25rem;
  top: 50%;
  transform: translateY(-50%);
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  z-index: 10;
}

.side-icon {
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 0.75rem;
  color: var(--text-secondary);
  background: var(--button-bg);
  border: 1px solid var(--button-border);
}

/* === Main Content === */
.main-content {
  position: relative;
  z-index: 5;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0 4rem;
}

.content-wrapper {
  max-width: 40rem;
  text-align: center;
}

.main-heading {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.role-text {
  margin-top: 0.75rem;
  font-size: 1.5rem;
  color: var(--text-secondary);
}

.role-animated {
  display: inline-block;
  color: var(--accent);
  font-weight: 600;
  animation: role-in 0.5s ease;
}

@keyframes role-in {
  from { opacity: 0; transform: translateY(0.5rem); }
  to { opacity: 1; transform: translateY(0); }
}

.intro-card {
  margin-top: 2rem;
  padding: 1.5rem 2rem;
  border-radius: 1rem;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  backdrop-filter: blur(10px);
  text-align: left;
}

.intro-heading {
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.intro-text {
  color: var(--text-secondary);
  line-height: 1.7;
}

/* === Reduced Motion === */
@media (prefers-reduced-motion: reduce) {
  .bird, .cloud-small, .cloud-large, .falling-element, .wave, .role-animated {
    animation: none;
  }
}
"#;
