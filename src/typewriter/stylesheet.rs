/// 默认样式表。
///
/// 根元素上的 `--delay`、`--dragDelay`、`--duration` 覆盖这里的默认值；
/// 每个字母的开始时间为 `delay + i * dragDelay`。
pub const STYLESHEET: &str = r#"[data-typewriter-by-letter] {
  --delay: 0ms;
  --dragDelay: 50ms;
  --duration: 400ms;
}

[data-typewriter-by-letter] .hide {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

[data-typewriter-by-letter] .word {
  display: inline-block;
  white-space: nowrap;
}

[data-typewriter-by-letter] .letter {
  display: inline-block;
  opacity: 0;
  animation: typewriter-letter var(--duration) ease-out forwards;
  animation-delay: calc(var(--delay) + var(--i) * var(--dragDelay));
}

@keyframes typewriter-letter {
  from {
    opacity: 0;
    transform: translateY(0.25em);
  }
  to {
    opacity: 1;
    transform: none;
  }
}

@media (prefers-reduced-motion: reduce) {
  [data-typewriter-by-letter] .letter {
    animation: none;
    opacity: 1;
  }
}
"#;
