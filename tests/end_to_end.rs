#![allow(unused_imports)]

use triplet_core::{
    db::structure::Structure,
    solver::{MayEqual, Solver},
    structures::term::{Constraint, Term},
};

mod end_to_end {
    use super::*;

    #[test]
    fn empty_structure_yields_no_assignments() {
        #[cfg(feature = "log")]
        env_logger::init();

        let structure = Structure::new();
        const A: u32 = 1;
        const B: u32 = 2;

        let constraints = vec![Constraint::new([Term::Var(0), Term::Node(A), Term::Node(B)])];
        let mut solver = Solver::new(&structure, 1, constraints, MayEqual::distinct(1));

        assert!(solver.is_valid());
        assert_eq!(solver.next_assignment(), None);
    }

    #[test]
    fn ground_constraint_alongside_a_variable() {
        let mut structure = Structure::new();
        const A: u32 = 1;
        const B: u32 = 2;
        const C: u32 = 3;
        structure.add_fact(A, B, C).unwrap();

        let constraints = vec![
            Constraint::ground(A, B, C),
            Constraint::new([Term::Var(0), Term::Node(B), Term::Node(C)]),
        ];
        let may_equal = MayEqual::all_may_equal(1);
        let mut solver = Solver::new(&structure, 1, constraints, may_equal);

        assert!(solver.is_valid());
        assert_eq!(solver.next_assignment(), Some(vec![A]));
        assert_eq!(solver.next_assignment(), None);
    }

    /// Chains two "pair" facts together so that solving binds a three-letter ordering: a pair
    /// fact links a greater and a lesser letter, and the lesser letter of one pair is the greater
    /// letter of the next.
    #[test]
    fn transitive_chain_across_two_pair_facts() {
        let mut structure = Structure::new();
        const PAIR1: u32 = 1;
        const PAIR2: u32 = 2;
        const A: u32 = 3;
        const B: u32 = 4;
        const C: u32 = 5;
        const GREATER: u32 = 6;
        const LESSER: u32 = 7;

        structure.add_fact(PAIR1, A, GREATER).unwrap();
        structure.add_fact(PAIR1, B, LESSER).unwrap();
        structure.add_fact(PAIR2, B, GREATER).unwrap();
        structure.add_fact(PAIR2, C, LESSER).unwrap();

        // 0: first pair, 1: second pair, 2: top letter, 3: middle letter, 4: bottom letter.
        let constraints = vec![
            Constraint::new([Term::Var(0), Term::Var(2), Term::Node(GREATER)]),
            Constraint::new([Term::Var(0), Term::Var(3), Term::Node(LESSER)]),
            Constraint::new([Term::Var(1), Term::Var(3), Term::Node(GREATER)]),
            Constraint::new([Term::Var(1), Term::Var(4), Term::Node(LESSER)]),
        ];
        let mut solver = Solver::new(&structure, 5, constraints, MayEqual::distinct(5));

        assert_eq!(
            solver.next_assignment(),
            Some(vec![PAIR1, PAIR2, A, B, C])
        );
        assert_eq!(solver.next_assignment(), None);
    }

    #[test]
    fn distinctness_governs_which_pairs_are_enumerated() {
        let mut structure = Structure::new();
        const A: u32 = 1;
        const B: u32 = 2;
        const X: u32 = 3;
        const R: u32 = 4;
        structure.add_fact(A, X, R).unwrap();
        structure.add_fact(B, X, R).unwrap();

        let constraints = || {
            vec![
                Constraint::new([Term::Var(0), Term::Node(X), Term::Node(R)]),
                Constraint::new([Term::Var(1), Term::Node(X), Term::Node(R)]),
            ]
        };

        let mut distinct = Solver::new(&structure, 2, constraints(), MayEqual::distinct(2));
        let mut found = Vec::new();
        while let Some(a) = distinct.next_assignment() {
            found.push((a[0], a[1]));
        }
        found.sort();
        assert_eq!(found, vec![(A, B), (B, A)]);

        let mut either = Solver::new(&structure, 2, constraints(), MayEqual::all_may_equal(2));
        let mut found = Vec::new();
        while let Some(a) = either.next_assignment() {
            found.push((a[0], a[1]));
        }
        found.sort();
        assert_eq!(found, vec![(A, A), (A, B), (B, A), (B, B)]);
    }

    #[test]
    fn self_referential_constraint_rejects_disagreeing_facts() {
        let mut structure = Structure::new();
        const A: u32 = 1;
        const B: u32 = 2;
        const C: u32 = 3;
        const D: u32 = 4;
        structure.add_fact(A, A, B).unwrap();
        structure.add_fact(C, D, B).unwrap();

        let constraints = vec![Constraint::new([Term::Var(0), Term::Var(0), Term::Var(1)])];
        let mut solver = Solver::new(&structure, 2, constraints, MayEqual::distinct(2));

        assert_eq!(solver.next_assignment(), Some(vec![A, B]));
        assert_eq!(solver.next_assignment(), None);
    }

    #[test]
    fn exhaustion_is_idempotent_and_leaves_the_structure_untouched() {
        let mut structure = Structure::new();
        const A: u32 = 1;
        const B: u32 = 2;
        const C: u32 = 3;
        structure.add_fact(A, B, C).unwrap();

        let constraints = vec![Constraint::new([Term::Var(0), Term::Node(B), Term::Node(C)])];
        let mut solver = Solver::new(&structure, 1, constraints, MayEqual::distinct(1));

        assert_eq!(solver.next_assignment(), Some(vec![A]));
        assert_eq!(solver.next_assignment(), None);
        assert_eq!(solver.next_assignment(), None);
        assert_eq!(solver.next_assignment(), None);

        assert!(structure.is_true(A, B, C));
        assert_eq!(structure.len(), 1);
    }
}
