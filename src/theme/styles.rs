//! Global CSS styles for BizCard.
//!
//! Colors, radius, shadow and sizes come from the `:root` variables written
//! by [`super::theme_variables`]. Direction-sensitive spacing uses logical
//! properties so RTL needs no overrides.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
}

body {
  font-family: var(--font-family);
  font-size: 0.875rem;
  line-height: 1.6;
  background: var(--bg);
  color: var(--text);
  -webkit-font-smoothing: antialiased;
  transition: background 200ms ease, color 200ms ease;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

button, input, select, textarea {
  font: inherit;
  color: inherit;
}

code {
  font-family: 'JetBrains Mono', 'SF Mono', Consolas, monospace;
  font-size: 0.8rem;
  word-break: break-all;
}

/* === Typography === */
h1 { font-size: 1.75rem; font-weight: 700; line-height: 1.3; }
h2 { font-size: 1.5rem; font-weight: 700; line-height: 1.3; }
h3 { font-size: 1.25rem; font-weight: 600; }
h4 { font-size: 1.05rem; font-weight: 600; margin-block-end: 0.75rem; }
h5 { font-size: 0.9rem; font-weight: 600; margin-block-end: 0.5rem; }

.text-secondary {
  color: var(--text-secondary);
}

/* === Surfaces === */
.card {
  background: var(--paper);
  border-radius: var(--radius);
  box-shadow: var(--card-shadow);
  border: var(--card-border);
  padding: 1.5rem;
}

.meta-list {
  display: grid;
  grid-template-columns: max-content 1fr;
  gap: 0.5rem 1rem;
}

.meta-list dt {
  color: var(--text-secondary);
}

.meta-list dd {
  font-weight: 500;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.5rem 1.1rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font-weight: 500;
  cursor: pointer;
  white-space: nowrap;
  transition: background 150ms ease, border-color 150ms ease, opacity 150ms ease;
}

.btn:hover {
  text-decoration: none;
}

.btn:disabled {
  opacity: 0.55;
  cursor: not-allowed;
}

.btn-contained {
  background: var(--primary);
  color: #fff;
}

.btn-contained:hover:not(:disabled) {
  background: color-mix(in srgb, var(--primary) 85%, #000);
}

.btn-outlined {
  background: transparent;
  border-color: var(--primary);
  color: var(--primary);
}

.btn-outlined:hover:not(:disabled) {
  background: color-mix(in srgb, var(--primary) 8%, transparent);
}

.btn-text {
  background: transparent;
  color: var(--primary);
}

.btn-text:hover:not(:disabled) {
  background: var(--hover);
}

.btn-danger {
  background: var(--error);
  color: #fff;
}

.btn-block {
  width: 100%;
}

.btn-icon {
  font-size: 1rem;
}

.btn-loading {
  position: relative;
  pointer-events: none;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-width: 2.25rem;
  height: 2.25rem;
  padding: 0 0.5rem;
  border: none;
  border-radius: 50%;
  background: transparent;
  cursor: pointer;
}

.icon-btn:hover {
  background: var(--hover);
}

.icon-btn.danger {
  color: var(--error);
}

.close-btn {
  border: none;
  background: transparent;
  font-size: 1.4rem;
  line-height: 1;
  cursor: pointer;
  color: var(--text-secondary);
}

/* === Form Fields === */
.form-section {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-section section {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.form-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

.form-grid.three {
  grid-template-columns: repeat(3, minmax(0, 1fr));
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-weight: 500;
  font-size: 0.85rem;
}

.input-required {
  color: var(--error);
}

.input-wrapper {
  position: relative;
  display: flex;
  align-items: center;
}

.input-icon {
  position: absolute;
  inset-inline-start: 0.75rem;
  color: var(--text-secondary);
  pointer-events: none;
}

.input-icon + .input-field {
  padding-inline-start: 2.25rem;
}

.input-field {
  width: 100%;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--divider);
  border-radius: var(--radius);
  background: var(--paper);
  transition: border-color 150ms ease, box-shadow 150ms ease;
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px color-mix(in srgb, var(--primary) 20%, transparent);
}

.input-field:disabled {
  background: var(--hover);
  cursor: default;
}

.input-field.has-error {
  border-color: var(--error);
}

.textarea {
  resize: vertical;
  min-height: 5rem;
}

.field-footer {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
}

.field-message {
  font-size: 0.78rem;
  color: var(--text-secondary);
}

.field-message.error {
  color: var(--error);
}

.char-counter {
  margin-inline-start: auto;
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.checkbox {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
}

.color-field .color-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.color-swatch {
  width: 2.5rem;
  height: 2.25rem;
  padding: 0;
  border: 1px solid var(--divider);
  border-radius: var(--radius);
  cursor: pointer;
}

.color-hex {
  font-family: 'JetBrains Mono', monospace;
}

.copy-field {
  display: flex;
  gap: 0.5rem;
}

.search-input-wrapper {
  position: relative;
  flex: 1;
}

.search-icon {
  position: absolute;
  inset-inline-start: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-secondary);
}

.search-input {
  padding-inline-start: 2.25rem;
}

/* === Slider & Switch === */
.slider-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.slider-header {
  display: flex;
  justify-content: space-between;
}

.slider-value {
  color: var(--primary);
  font-weight: 600;
}

.slider {
  appearance: none;
  width: 100%;
  height: 6px;
  border-radius: 3px;
  background: linear-gradient(to right, var(--primary) var(--fill), var(--divider) var(--fill));
  cursor: pointer;
}

[dir="rtl"] .slider {
  background: linear-gradient(to left, var(--primary) var(--fill), var(--divider) var(--fill));
}

.slider::-webkit-slider-thumb {
  appearance: none;
  width: 18px;
  height: 18px;
  border-radius: 50%;
  background: var(--paper);
  border: 2px solid var(--primary);
}

.switch-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding-block: 0.5rem;
}

.switch-text {
  display: flex;
  flex-direction: column;
}

.switch-description {
  font-size: 0.78rem;
  color: var(--text-secondary);
}

.switch {
  position: relative;
  flex-shrink: 0;
  width: 2.5rem;
  height: 1.4rem;
  border: none;
  border-radius: 1rem;
  background: var(--divider);
  cursor: pointer;
  transition: background 150ms ease;
}

.switch.on {
  background: var(--primary);
}

.switch.disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.switch-thumb {
  position: absolute;
  top: 0.2rem;
  inset-inline-start: 0.2rem;
  width: 1rem;
  height: 1rem;
  border-radius: 50%;
  background: #fff;
  transition: inset-inline-start 150ms ease;
}

.switch.on .switch-thumb {
  inset-inline-start: 1.3rem;
}

/* === Pills & Swatches === */
.pill-group {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.35rem 0.9rem;
  border: 1px solid var(--divider);
  border-radius: 2rem;
  background: transparent;
  cursor: pointer;
}

.pill.selected {
  background: color-mix(in srgb, var(--primary) 12%, transparent);
  border-color: var(--primary);
  color: var(--primary);
}

.swatch-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.6rem;
}

.swatch {
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  border: 2px solid transparent;
  cursor: pointer;
  color: #fff;
  display: flex;
  align-items: center;
  justify-content: center;
}

.swatch.selected {
  border-color: var(--text);
}

/* === Badges, Alerts, Feedback === */
.badge {
  display: inline-block;
  padding: 0.1rem 0.55rem;
  border-radius: 1rem;
  font-size: 0.72rem;
  font-weight: 600;
  background: color-mix(in srgb, var(--primary) 12%, transparent);
  color: var(--primary);
}

.badge.premium {
  background: color-mix(in srgb, var(--warning) 18%, transparent);
  color: var(--warning);
}

.alert {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: var(--radius);
  margin-block-end: 1rem;
}

.alert-body {
  flex: 1;
}

.alert-close {
  border: none;
  background: transparent;
  font-size: 1.1rem;
  cursor: pointer;
  color: inherit;
}

.alert-success { background: color-mix(in srgb, var(--success) 14%, transparent); color: var(--success); }
.alert-info { background: color-mix(in srgb, var(--info) 14%, transparent); color: var(--info); }
.alert-warning { background: color-mix(in srgb, var(--warning) 14%, transparent); color: var(--warning); }
.alert-error { background: color-mix(in srgb, var(--error) 14%, transparent); color: var(--error); }

.snackbar {
  position: fixed;
  inset-block-end: 1.5rem;
  inset-inline-start: 50%;
  transform: translateX(-50%);
  z-index: 1300;
  min-width: 18rem;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
}

[dir="rtl"] .snackbar {
  transform: translateX(50%);
}

.spinner-wrapper {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 2rem;
}

.spinner {
  width: 2rem;
  height: 2rem;
  border: 3px solid var(--divider);
  border-top-color: var(--primary);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

.spinner-sm {
  width: 1rem;
  height: 1rem;
  border-width: 2px;
}

.spinner-label {
  color: var(--text-secondary);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.empty-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 3rem 1rem;
  text-align: center;
}

.empty-icon {
  font-size: 2.5rem;
}

.progress-label {
  display: flex;
  justify-content: space-between;
  font-size: 0.8rem;
}

.progress-track, .bar-track, .strength-track {
  height: 6px;
  border-radius: 3px;
  background: var(--divider);
  overflow: hidden;
}

.progress-fill, .bar-fill, .strength-fill {
  height: 100%;
  background: var(--primary);
  transition: width 300ms ease;
}

/* === Modal & Drawer === */
.modal-backdrop, .drawer-backdrop, .sidebar-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.4);
  z-index: 1200;
}

.modal {
  position: fixed;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  z-index: 1250;
  width: min(32rem, 92vw);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--paper);
  border-radius: var(--radius);
  box-shadow: 0 16px 48px rgba(0, 0, 0, 0.2);
}

.modal-header, .drawer-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem;
  border-block-end: 1px solid var(--divider);
}

.modal-body, .drawer-body {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.25rem;
}

.modal-footer, .drawer-footer {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
  padding: 1rem 1.25rem;
  border-block-start: 1px solid var(--divider);
}

.drawer {
  position: fixed;
  top: 0;
  inset-inline-end: 0;
  bottom: 0;
  z-index: 1250;
  width: 20rem;
  display: flex;
  flex-direction: column;
  background: var(--paper);
  box-shadow: -8px 0 24px rgba(0, 0, 0, 0.15);
}

.drawer-body {
  flex: 1;
  overflow-y: auto;
}

.customizer-section {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.share-qr, .public-card-qr {
  display: flex;
  justify-content: center;
}

.share-targets {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.qr-code svg {
  display: block;
  width: 100%;
  height: auto;
}

.share-qr .qr-code, .public-card-qr .qr-code {
  width: 11rem;
}

.qr-error {
  font-size: 2rem;
  color: var(--warning);
}

/* === Dropdowns === */
.dropdown {
  position: relative;
}

.dropdown-menu {
  position: absolute;
  top: calc(100% + 0.25rem);
  inset-inline-end: 0;
  z-index: 1100;
  min-width: 11rem;
  padding: 0.35rem;
  background: var(--paper);
  border-radius: var(--radius);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
}

.dropdown-header {
  padding: 0.5rem 0.75rem;
  border-block-end: 1px solid var(--divider);
  margin-block-end: 0.35rem;
}

.dropdown-item {
  display: block;
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: none;
  border-radius: calc(var(--radius) / 2);
  background: transparent;
  text-align: start;
  color: var(--text);
  cursor: pointer;
}

.dropdown-item:hover, .dropdown-item.selected {
  background: var(--hover);
  text-decoration: none;
}

/* === Dashboard Shell === */
.dashboard-layout {
  display: flex;
  min-height: 100vh;
}

.sidebar {
  position: fixed;
  top: 0;
  bottom: 0;
  inset-inline-start: 0;
  z-index: 1000;
  width: var(--sidebar-width);
  display: flex;
  flex-direction: column;
  background: var(--paper);
  border-inline-end: 1px solid var(--divider);
  transition: width 200ms ease;
  overflow-x: hidden;
}

.sidebar.horizontal {
  position: static;
  width: 100%;
  flex-direction: row;
  border-inline-end: none;
  border-block-end: 1px solid var(--divider);
}

.sidebar-brand {
  display: flex;
  align-items: center;
  height: var(--topbar-height);
  padding-inline: 1.5rem;
}

.brand {
  display: inline-flex;
  align-items: center;
  gap: 0.6rem;
  color: var(--text);
  font-weight: 700;
  font-size: 1.15rem;
}

.brand:hover {
  text-decoration: none;
}

.brand-mark {
  font-size: 1.5rem;
}

.sidebar-nav {
  flex: 1;
  overflow-y: auto;
  padding: 0 1rem 1rem;
}

.sidebar.horizontal .sidebar-nav {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.5rem 1rem;
}

.nav-section {
  margin-block-start: 1.25rem;
}

.nav-title {
  display: block;
  padding: 0 0.75rem 0.35rem;
  font-size: 0.72rem;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--text-secondary);
}

.nav-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.55rem 0.75rem;
  border-radius: var(--radius);
  color: var(--text);
  white-space: nowrap;
}

.nav-link:hover {
  background: var(--hover);
  text-decoration: none;
}

.nav-link.active {
  background: var(--primary);
  color: #fff;
}

.nav-link .badge {
  margin-inline-start: auto;
}

.nav-icon {
  width: 1.25rem;
  text-align: center;
}

.sidebar-collapsed .nav-title,
.sidebar-collapsed .brand-name,
.sidebar-collapsed .nav-link span:not(.nav-icon) {
  display: none;
}

.page-wrapper {
  flex: 1;
  min-width: 0;
  margin-inline-start: var(--sidebar-width);
  transition: margin 200ms ease;
}

.layout-horizontal .page-wrapper {
  margin-inline-start: 0;
}

.topbar {
  position: sticky;
  top: 0;
  z-index: 900;
  height: var(--topbar-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-inline: 1.5rem;
  background: var(--bg);
}

.topbar-start, .topbar-end, .header-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.avatar-btn {
  border: none;
  background: transparent;
  cursor: pointer;
}

.page-content {
  padding: 1.5rem;
}

.container {
  max-width: var(--container-width);
  margin-inline: auto;
}

.mobile-only {
  display: none;
}

/* === Page Header === */
.page {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.page-header {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 1rem;
}

.breadcrumb {
  display: flex;
  gap: 0.4rem;
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.page-subtitle {
  color: var(--text-secondary);
}

.page-actions, .toolbar {
  display: flex;
  align-items: center;
  flex-wrap: wrap;
  gap: 0.5rem;
}

/* === Avatars === */
.avatar {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: var(--primary);
  color: #fff;
  font-weight: 600;
  overflow: hidden;
}

.avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar-sm { width: 2rem; height: 2rem; font-size: 0.75rem; }
.avatar-lg { width: 5rem; height: 5rem; font-size: 1.5rem; }
.avatar-xl { width: 6.5rem; height: 6.5rem; font-size: 2rem; }

.avatar-upload {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.avatar-upload-actions {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 0.35rem;
}

/* === Dashboard Widgets === */
.stat-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(13rem, 1fr));
  gap: 1.25rem;
}

.stat-card {
  display: flex;
  gap: 1rem;
  align-items: center;
}

.stat-icon {
  width: 3rem;
  height: 3rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius);
  font-size: 1.4rem;
}

.stat-body {
  display: flex;
  flex-direction: column;
}

.stat-title {
  color: var(--text-secondary);
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 700;
}

.stat-change.up { color: var(--success); }
.stat-change.down { color: var(--error); }

.dashboard-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 1.5rem;
}

.quick-actions {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 0.75rem;
}

.quick-action {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem;
  border: 1px solid var(--divider);
  border-radius: var(--radius);
  color: var(--text);
  text-align: center;
}

.quick-action:hover {
  border-color: var(--primary);
  text-decoration: none;
}

.quick-action-icon {
  font-size: 1.5rem;
}

.activity-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
}

.activity-item {
  display: flex;
  gap: 0.75rem;
  align-items: flex-start;
}

.activity-icon {
  font-size: 1.2rem;
}

.activity-body {
  flex: 1;
}

.activity-time {
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.bar-row {
  display: grid;
  grid-template-columns: 7rem 1fr 3.5rem;
  align-items: center;
  gap: 0.75rem;
  padding-block: 0.35rem;
}

.bar-value {
  text-align: end;
  font-weight: 600;
}

.table {
  width: 100%;
  border-collapse: collapse;
}

.table th, .table td {
  padding: 0.65rem 0.75rem;
  text-align: start;
  border-block-end: 1px solid var(--divider);
}

.table th {
  font-weight: 600;
  color: var(--text-secondary);
}

/* === Wizard & Editor === */
.step-indicator {
  display: flex;
  list-style: none;
  gap: 0.5rem;
  counter-reset: step;
}

.step {
  flex: 1;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--text-secondary);
}

.step.done {
  cursor: pointer;
  color: var(--text);
}

.step.current {
  color: var(--primary);
  font-weight: 600;
}

.step-marker {
  width: 1.75rem;
  height: 1.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  border: 2px solid currentColor;
  flex-shrink: 0;
}

.step.done .step-marker {
  background: var(--success);
  border-color: var(--success);
  color: #fff;
}

.step.current .step-marker {
  background: var(--primary);
  border-color: var(--primary);
  color: #fff;
}

.wizard-card {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.wizard-actions {
  display: flex;
  justify-content: space-between;
  gap: 0.5rem;
}

.wizard-final {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.editor-layout, .preview-layout, .qr-layout {
  display: grid;
  grid-template-columns: minmax(0, 3fr) minmax(0, 2fr);
  gap: 1.5rem;
  align-items: start;
}

.editor-main {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.editor-preview, .preview-side {
  position: sticky;
  top: calc(var(--topbar-height) + 1rem);
}

.last-saved {
  font-size: 0.78rem;
  color: var(--text-secondary);
}

.preview-stage {
  display: flex;
  justify-content: center;
  padding: 2rem;
  background: var(--hover);
  border-radius: var(--radius);
  overflow: auto;
}

.social-link-row {
  display: grid;
  grid-template-columns: auto 10rem 1fr auto;
  align-items: start;
  gap: 0.5rem;
}

.design-panel h4 {
  margin-block-end: 0.5rem;
}

.strength-meter {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.strength-label {
  font-size: 0.75rem;
}

/* === Card Preview === */
.card-preview {
  width: 22rem;
  max-width: 100%;
  overflow: hidden;
  transform-origin: top center;
}

.card-header {
  height: 6.5rem;
}

.card-header.patterned {
  background-image: radial-gradient(rgba(255, 255, 255, 0.25) 1px, transparent 1px);
  background-size: 12px 12px;
}

.card-body {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.35rem;
  padding: 0 1.5rem 1.5rem;
  text-align: center;
}

.card-avatar {
  width: 5.5rem;
  height: 5.5rem;
  margin-block-start: -2.75rem;
  border-radius: 50%;
  border: 4px solid var(--paper);
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  color: #fff;
}

.card-avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar-initials {
  font-size: 1.75rem;
  font-weight: 700;
}

.card-name {
  font-size: 1.3em;
  font-weight: 700;
}

.card-title {
  opacity: 0.85;
}

.card-company {
  opacity: 0.7;
  font-size: 0.9em;
}

.card-bio {
  margin-block: 0.5rem;
  font-size: 0.9em;
}

.card-contacts {
  list-style: none;
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  text-align: start;
}

.card-contacts li {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.contact-icon {
  width: 1.75rem;
  height: 1.75rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.06);
}

.card-socials {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin-block-start: 0.75rem;
}

.social-badge {
  width: 2rem;
  height: 2rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  color: #fff;
  font-size: 0.85rem;
}

/* === Templates & Card List === */
.template-grid, .card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(15rem, 1fr));
  gap: 1.25rem;
}

.template-grid.compact {
  grid-template-columns: repeat(auto-fill, minmax(7rem, 1fr));
  gap: 0.75rem;
}

.template-card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 0;
  overflow: hidden;
}

.template-info {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  padding: 0 1rem 1rem;
}

.template-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.35rem;
  padding: 0.5rem;
  border: 2px solid var(--divider);
  border-radius: var(--radius);
  background: transparent;
  cursor: pointer;
}

.template-tile.selected {
  border-color: var(--primary);
}

.template-swatch {
  width: 100%;
  height: 3.5rem;
  border-radius: calc(var(--radius) / 2);
}

.template-card .template-swatch {
  height: 7rem;
  border-radius: 0;
}

.template-name {
  font-weight: 600;
}

.card-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.card-summary {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.card-list .card-summary {
  flex-direction: row;
  align-items: center;
}

.card-summary-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
}

.card-summary-body {
  flex: 1;
}

.card-summary-stats {
  display: flex;
  gap: 1rem;
  color: var(--text-secondary);
  font-size: 0.8rem;
}

.card-summary-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem;
}

.status {
  text-transform: capitalize;
}

.status.active { background: color-mix(in srgb, var(--success) 15%, transparent); color: var(--success); }
.status.draft { background: color-mix(in srgb, var(--warning) 15%, transparent); color: var(--warning); }
.status.inactive { background: var(--hover); color: var(--text-secondary); }

.public-flag {
  color: var(--info);
}

.view-toggle {
  display: flex;
  gap: 0.25rem;
}

.view-toggle .icon-btn.selected {
  background: var(--hover);
  color: var(--primary);
}

/* === QR Generator === */
.qr-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.qr-form section {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.qr-preview {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.qr-image-frame {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 18rem;
  padding: 1rem;
  background: var(--hover);
  border-radius: var(--radius);
}

.qr-image {
  max-width: 100%;
  height: auto;
}

.qr-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

/* === Profile & Settings === */
.profile-header {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.profile-identity {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  align-items: flex-start;
}

.profile-columns, .settings-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 1.5rem;
  align-items: start;
}

.settings-grid {
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
}

.settings-grid .card, .profile-columns .card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

/* === Public Pages === */
.public-layout {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.public-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--topbar-height);
  padding-inline: 2rem;
  border-block-end: 1px solid var(--divider);
  background: var(--paper);
}

.public-content {
  flex: 1;
  padding: 2rem 1.5rem;
}

.public-footer {
  padding: 1.25rem;
  text-align: center;
  color: var(--text-secondary);
  font-size: 0.8rem;
}

.hero {
  display: grid;
  grid-template-columns: 1fr 1fr;
  align-items: center;
  gap: 3rem;
  max-width: 72rem;
  margin: 0 auto 3rem;
}

.hero-copy {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.hero-title {
  font-size: 2.5rem;
  font-weight: 800;
}

.hero-subtitle {
  font-size: 1.1rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  gap: 0.75rem;
}

.hero-card {
  display: flex;
  justify-content: center;
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1.25rem;
  max-width: 72rem;
  margin: 0 auto;
}

.feature {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.feature-icon {
  font-size: 1.75rem;
}

.auth-page {
  display: flex;
  justify-content: center;
  padding-block: 2rem;
}

.auth-card {
  width: min(28rem, 100%);
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.auth-title {
  text-align: center;
}

.auth-subtitle, .auth-footer {
  text-align: center;
  color: var(--text-secondary);
}

.auth-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.verify-icon {
  font-size: 3rem;
  text-align: center;
}

.public-card-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
}

.public-card-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
}

.public-card-stats {
  color: var(--text-secondary);
}

.placeholder-page, .not-found-page {
  display: flex;
  justify-content: center;
  padding-block: 3rem;
}

/* === Responsive === */
@media (max-width: 960px) {
  .sidebar {
    transform: translateX(-100%);
    transition: transform 200ms ease;
  }

  [dir="rtl"] .sidebar {
    transform: translateX(100%);
  }

  .mobile-sidebar-open .sidebar {
    transform: none;
  }

  .page-wrapper {
    margin-inline-start: 0;
  }

  .mobile-only {
    display: inline-flex;
  }

  .desktop-only {
    display: none;
  }

  .hero, .dashboard-grid, .editor-layout, .preview-layout, .qr-layout, .profile-columns {
    grid-template-columns: 1fr;
  }

  .editor-preview, .preview-side {
    position: static;
  }

  .form-grid, .form-grid.three {
    grid-template-columns: 1fr;
  }
}
"#;
