//! The single-page query form served on `GET /`.

/// Posts the form url-encoded to the current URL, which keeps `?secret=`.
pub const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Chatbot</title>
  <style>
    body { background-color: black; color: white; font-family: Arial, sans-serif; }
    textarea { width: 100%; height: 200px; resize: vertical; overflow-y: auto; background: #333; color: white; border: 1px solid #666; }
    select, button { background: #333; color: white; border: 1px solid #666; }
    #response { margin-top: 20px; padding: 10px; background: #222; border: 1px solid #666; white-space: pre-wrap; }
  </style>
</head>
<body>
  <h1>Chatbot</h1>
  <form id="chatForm">
    <select name="model">
      <option value="claude">Claude</option>
      <option value="deepseek">DeepSeek</option>
    </select>
    <br><br>
    <textarea name="query" maxlength="5000" placeholder="Enter your query..."></textarea>
    <br>
    <button type="submit">Send</button>
  </form>
  <div id="response"></div>
  <script>
    document.getElementById('chatForm').addEventListener('submit', async e => {
      e.preventDefault();
      const out = document.getElementById('response');
      out.innerText = '...';
      const body = new URLSearchParams(new FormData(e.target));
      const response = await fetch(location.href, { method: 'POST', body });
      out.innerText = await response.text();
    });
  </script>
</body>
</html>
"#;
