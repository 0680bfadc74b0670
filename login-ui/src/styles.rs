pub const LOGIN_STYLES: &str = r#"
/* Page */
.login-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    font-family: system-ui, -apple-system, "PingFang SC", "Microsoft YaHei", sans-serif;
}

/* Card */
.login-card {
    width: 100%;
    max-width: 28rem;
    padding: 2rem;
    background: #ffffff;
    border-radius: 0.5rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    transition: box-shadow 0.2s ease;
}

.login-card:hover {
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}

/* Fields */
.login-field {
    display: flex;
    flex-direction: column;
}

.login-input {
    width: 100%;
    padding: 0.75rem;
    border: 1px solid #f9a8d4;
    border-radius: 0.25rem;
    box-sizing: border-box;
    font-size: 1rem;
}

.login-input:focus {
    outline: none;
    border-color: #ec4899;
    box-shadow: 0 0 0 1px #ec4899;
}

.login-code-row {
    display: flex;
    gap: 0.5rem;
}

.login-code-input {
    flex: 1;
    border-radius: 0.25rem 0 0 0.25rem;
}

.login-error {
    margin: 0.25rem 0 0 0;
    font-size: 0.875rem;
    color: #ec4899;
}

/* Buttons */
.login-code-button,
.login-submit {
    padding: 0.75rem;
    border: none;
    background: #ec4899;
    color: #ffffff;
    font-size: 1rem;
    cursor: pointer;
    transition: background 0.2s ease;
}

.login-code-button {
    border-radius: 0 0.25rem 0.25rem 0;
    white-space: nowrap;
}

.login-submit {
    width: 100%;
    border-radius: 0.25rem;
}

.login-code-button:hover:not(:disabled),
.login-submit:hover:not(:disabled) {
    background: #db2777;
}

.login-code-button:disabled,
.login-submit:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.login-spinner {
    display: inline-block;
    animation: login-spin 1s linear infinite;
}

@keyframes login-spin {
    from { transform: rotate(0deg); }
    to   { transform: rotate(360deg); }
}

/* Success dialog */
.login-dialog {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
}

.login-dialog-scrim {
    position: fixed;
    inset: 0;
    background: rgba(17, 24, 39, 0.6);
}

.login-dialog-card {
    position: relative;
    z-index: 10;
    padding: 2rem;
    background: #ffffff;
    border-radius: 1rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    animation: login-fade-in-down 0.3s ease;
}

.login-dialog-title {
    margin: 0 0 1rem 0;
    font-size: 1.5rem;
    font-weight: 800;
    text-align: center;
    color: #db2777;
}

.login-dialog-body {
    margin: 0 0 1.5rem 0;
    font-size: 1.125rem;
    text-align: center;
    color: #374151;
}

.login-dialog-actions {
    display: flex;
    justify-content: center;
}

.login-dialog-close {
    padding: 0.75rem 1.5rem;
    border: none;
    border-radius: 9999px;
    background: #db2777;
    color: #ffffff;
    cursor: pointer;
}

.login-dialog-close:hover {
    background: #be185d;
}

@keyframes login-fade-in-down {
    from { opacity: 0; transform: translateY(-10px); }
    to   { opacity: 1; transform: translateY(0); }
}
"#;
