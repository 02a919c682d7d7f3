pub fn get_signature(version: &str) -> String {
    format!(
        r#"
   _  __         __ ______          
  / |/ /____ __ / //_  __/___ _ ___ 
 /    // -_) \ // __// /  / _ `// _ `/   NextTag (next semver tag for a git repository)
/_/|_/ \__//_\_\\__//_/   \_,_/ \_, / 
                               /___/     v{}
"#,
        version
    )
}
