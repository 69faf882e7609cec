//! Starter code shown in the editor before a user has saved a solution.

pub const DEFAULT_LANGUAGE: &str = "python";

const PYTHON_TEMPLATE: &str = r#"# Python Solution Template
def solution():
    """
    Write your solution here
    """
    # Example: Hello World
    return "Hello, World!"

# Test your solution
result = solution()
print(result)"#;

const JAVA_TEMPLATE: &str = r#"public class Solution {
    /**
     * Write your solution here
     */
    public static String solution() {
        // Example: Hello World
        return "Hello, World!";
    }

    public static void main(String[] args) {
        String result = solution();
        System.out.println(result);
    }
}"#;

const JAVASCRIPT_TEMPLATE: &str = r#"// JavaScript Solution Template
function solution() {
    /**
     * Write your solution here
     */
    // Example: Hello World
    return "Hello, World!";
}

// Test your solution
const result = solution();
console.log(result);"#;

const CPP_TEMPLATE: &str = r#"#include <iostream>
#include <string>
using namespace std;

/**
 * Write your solution here
 */
string solution() {
    // Example: Hello World
    return "Hello, World!";
}

int main() {
    string result = solution();
    cout << result << endl;
    return 0;
}"#;

const C_TEMPLATE: &str = r#"#include <stdio.h>
#include <string.h>

/**
 * Write your solution here
 */
void solution() {
    // Example: Hello World
    printf("Hello, World!\n");
}

int main() {
    solution();
    return 0;
}"#;

/// Starter code for `language`. Unknown languages get the Python template.
pub fn default_template(language: &str) -> &'static str {
    match language.trim().to_lowercase().as_str() {
        "java" => JAVA_TEMPLATE,
        "javascript" => JAVASCRIPT_TEMPLATE,
        "c++" => CPP_TEMPLATE,
        "c" => C_TEMPLATE,
        _ => PYTHON_TEMPLATE,
    }
}
