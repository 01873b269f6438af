fn main() {
  ordpool::main()
}
