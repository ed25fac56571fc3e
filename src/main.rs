use std::error::Error;

use coursework::euler::{self, SURVEY_HEADER};
use coursework::forest;
use coursework::graph::Graph;
use coursework::hash::{ChainedHashMap, NumberDictionary, OpenHashMap};
use coursework::huffman::HuffmanTree;
use coursework::linked::{ForwardList, LinkedList, Polynomial};
use coursework::logic::resolution::{self, Clause};
use coursework::logic::{Formula, TableMode, TruthTable};
use coursework::queue::{PriorityQueue, Queue, RingQueue};
use coursework::relation::points::{DIAMOND_13, GRID_3X3};
use coursework::relation::{ClosureAlgorithm, PointSet, RelationMatrix};
use coursework::route::{self, G1, G2};
use coursework::sim::{DEMO_LAST_TICK, Simulation};
use coursework::stack::{BoundedStack, Stack};
use coursework::string::{BoundedString, word_eq};
use coursework::tree::{AvlTree, BinarySearchTree, RedBlackTree};

fn main() -> Result<(), Box<dyn Error>> {
    println!("\n[ForwardList]\n");

    let mut sorted = ForwardList::new();
    for value in [5, 1, 4, 2, 3] {
        sorted.insert_where(value, |new, old| new < old);
    }
    println!("{sorted}");
    sorted.retain(|value| value % 2 == 1);
    sorted.reverse();
    println!("odd, reversed: {sorted}");

    println!("\n[LinkedList]\n");

    let mut list: LinkedList<_> = (1..=5).collect();
    list.try_insert(2, 10)?;
    let removed = list.try_remove(0)?;
    println!("{list}, removed {removed}");

    let polynomial: Polynomial = [(3, 2), (-2, 1), (1, 0)].into_iter().collect();
    println!("p(x) = {polynomial}, p(2) = {}", polynomial.evaluate(2.0));

    println!("\n[Stack & Queue]\n");

    let stack: Stack<_> = "abc".chars().collect();
    println!("stack: {stack}");
    let mut bounded = BoundedStack::with_cap(2);
    bounded.push(1)?;
    bounded.push(2)?;
    println!("third push: {:?}", bounded.push(3));

    let mut queue: Queue<_> = (1..=3).collect();
    queue.enqueue(4);
    let front = queue.dequeue();
    println!("queue: {queue:?}, front {front:?}");
    let mut ring = RingQueue::with_cap(3);
    for value in 1..=3 {
        ring.enqueue(value)?;
    }
    println!("ring: {ring:?}, full {}", ring.is_full());
    let mut tasks = PriorityQueue::new();
    tasks.enqueue("low", 1);
    tasks.enqueue("high", 5);
    tasks.enqueue("also high", 5);
    println!("priority: {tasks:?}");
    println!("first out: {}", tasks.dequeue()?);

    println!("\n[Strings]\n");

    let mut text = BoundedString::from_str_truncated("hello world", 16);
    text.insert(b"big ", 6)?;
    println!("{text} ({} of {} bytes)", text.len(), text.max_len());
    println!("'Rust' == 'rust!': {}", word_eq("Rust", "rust!"));

    println!("\n[Hashing]\n");

    let mut chained: ChainedHashMap<&str, u32> = ChainedHashMap::with_buckets(4);
    for (key, value) in [("one", 1), ("two", 2), ("three", 3), ("four", 4), ("five", 5)] {
        chained.insert(key, value);
    }
    println!("{chained}");
    println!("bucket sizes: {:?}", chained.bucket_lens().collect::<Vec<_>>());

    let mut open = OpenHashMap::with_size(7);
    for key in [3, 10, 17] {
        println!("{key} -> slot {}", open.insert(key, key * 100)?);
    }
    open.remove(10)?;
    println!("after removing 10, 17 is at {:?}", open.find_index(17));

    let mut dictionary = NumberDictionary::new();
    for (word, value) in [("twenty", 20), ("five", 5), ("hundred", 100)] {
        dictionary.insert(word, value);
    }
    println!("{}", dictionary.replace_numbers("I owe you twenty five dollars"));

    println!("\n[Trees]\n");

    let bst = BinarySearchTree::from_slice(&[50, 30, 70, 20, 40, 60, 80]);
    println!("{bst}");
    println!("breadth first: {:?}", bst.breadth_first());
    let avl: AvlTree<_> = (1..=15).collect();
    println!("avl height {} with root {:?}", avl.height(), avl.root());
    let red_black: RedBlackTree<_> = (1..=15).collect();
    println!("red-black root {:?}, black height {:?}", red_black.root(), red_black.black_height());

    println!("\n[Huffman]\n");

    let message = "мама мыла раму";
    let huffman = HuffmanTree::from_text(message)?;
    print!("{huffman}");
    let encoded = huffman.encode(message)?;
    println!("{encoded} ({} bits)", encoded.len());
    println!("decoded: {}", huffman.decode(&encoded)?);

    println!("\n[Graph]\n");

    let graph = Graph::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]);
    print!("{graph}");
    println!("dfs: {:?}", graph.dfs(0)?);
    println!("bfs: {:?}", graph.bfs(0)?);

    println!("\n[Relations]\n");

    let relation = RelationMatrix::from_fn(10, |x, y| x < 3 && y < 3 || x == y || x > 3 && y > 3);
    println!("equivalence: {}", relation.is_equivalence());
    println!("factor set: {}", relation.factor_set()?);

    let chain = RelationMatrix::from_fn(10, |x, y| y == x + 1);
    let algorithms = [
        ClosureAlgorithm::Composition,
        ClosureAlgorithm::SquaredComposition,
        ClosureAlgorithm::Warshall,
    ];
    for algorithm in algorithms {
        let (closure, stats) = chain.transitive_closure(algorithm);
        println!("{algorithm}: {} pairs, {stats:?}", closure.len());
    }

    for points in [&GRID_3X3[..], &DIAMOND_13[..]] {
        let order = PointSet::from(points).norm_order();
        println!("levels: {:?}", order.topological_levels()?);
    }

    println!("\n[Routes]\n");

    let g1 = RelationMatrix::from_rows(&G1)?;
    let g2 = RelationMatrix::from_rows(&G2)?;
    print!("{g1}");
    for sequence in [&[0, 1, 2][..], &[0, 1, 0], &[0, 1, 2, 0]] {
        println!("{sequence:?}: {}", route::classify(&g1, sequence));
    }
    println!("walks of length 3: {:?}", route::walk_count_matrix(&g2, 3));
    let longest = route::maximal_simple_chains(&g1, 0).into_iter().max_by_key(Vec::len);
    println!("longest chain from 0: {longest:?}");

    println!("\n[Forests]\n");

    println!("components: {}", forest::component_count(&g2));
    println!("spanning forest edges: {:?}", forest::spanning_forest(&g1).edges);
    println!("bridges: {:?}", forest::bridges(&g1));
    match forest::split_into_two(&g1) {
        Ok(split) => println!("split by removing {:?}", split.removed),
        Err(error) => println!("{error}"),
    }

    println!("\n[Euler & Hamilton]\n");

    println!("{SURVEY_HEADER}");
    for row in euler::survey(5, euler::DEFAULT_SAMPLES, 2024) {
        println!("{row}");
    }

    println!("\n[Logic]\n");

    let formula = Formula::parse("(A | B) & !C")?;
    print!("{}", TruthTable::new(&formula).display(TableMode::TrueOnly));
    let premises = [Formula::parse("A | B")?, Formula::parse("!A")?];
    let goal = Formula::parse("B")?;
    println!("A | B, !A entails B: {}", resolution::formula_entails(&premises, &goal));
    let clauses: Vec<Clause> = ["A | B", "!A | C", "!B | C", "!C"]
        .into_iter()
        .map(str::parse::<Clause>)
        .collect::<Result<_, _>>()?;
    for step in resolution::refute(&clauses).steps {
        println!("{step}");
    }

    println!("\n[Processors]\n");

    let mut simulation = Simulation::demo();
    for report in simulation.run(DEMO_LAST_TICK + 1) {
        println!("{report}");
    }

    Ok(())
}
