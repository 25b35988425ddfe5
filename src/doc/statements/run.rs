/*!
# `RUN`

## Purpose
Runs the program from the first line. Variables keep their values.

*/
