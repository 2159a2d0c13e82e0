// Host entry point for when the runtime is invoked directly rather than
// linked into a compiled Javalette program. It only identifies itself;
// the library surface is the five console primitives in the ffi module.

fn main() {
    println!("Runtime library for Javalette language.");
}
