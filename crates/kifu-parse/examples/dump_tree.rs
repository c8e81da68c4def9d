use std::io::Read;

use kifu_parse::{GameTree, Tokenizer};

fn print_tree(tree: &GameTree, depth: usize) {
    let indent = "  ".repeat(depth);
    for node in &tree.sequence {
        let props: Vec<String> = node
            .properties()
            .map(|p| format!("{}{:?}", p.ident, p.values))
            .collect();
        println!("{indent};{}", props.join(" "));
    }
    for leaf in &tree.leaves {
        println!("{indent}(");
        print_tree(leaf, depth + 1);
        println!("{indent})");
    }
}

fn main() {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source).unwrap();

    println!("=== Tokens ===");
    for tok in Tokenizer::new(&source) {
        println!("{:?}", tok);
    }

    println!("\n=== Tree ===");
    match kifu_parse::parse(&source) {
        Ok(tree) => print_tree(&tree, 0),
        Err(e) => eprint!("{}", e.render("<stdin>", &source)),
    }
}
