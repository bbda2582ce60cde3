//! Ask a few questions about a small family tree

use horn_logic::prelude::*;

fn main() -> Result<()> {
    let mut kb = KnowledgeBase::new();
    for sentence in &[
        "Mother(Ann,Bob)",
        "Father(Bob,Cid)",
        "Father(Bob,Dee)",
        "Mother(x,y) => Parent(x,y)",
        "Father(x,y) => Parent(x,y)",
        "Parent(x,y) ^ Parent(y,z) => Grandparent(x,z)",
    ] {
        kb.add_sentence(sentence)?;
    }
    print!("{}", kb);

    for query in &["Grandparent(Ann,Cid)", "Grandparent(Bob,Cid)", "~Parent(Ann,Bob)"] {
        let goal: Predicate = query.parse()?;
        println!("{} ? {}", goal, kb.query(&goal));
    }

    // a query with a variable: list every binding found for it
    let goal: Predicate = "Grandparent(Ann,who)".parse()?;
    let who = Term::new("who");
    let grandchildren: Vec<String> = kb
        .proofs(&goal)
        .iter()
        .map(|s| s.walk(&who).to_string())
        .collect();
    println!("Grandchildren of Ann: {:?}", grandchildren);

    Ok(())
}
